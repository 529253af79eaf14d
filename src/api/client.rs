//! RelaMind REST/SSE API Client
//!
//! Native HTTP client for the RelaMind backend: streaming chat endpoints and
//! single-shot diary calls.

use std::time::Duration;

use futures_util::{FutureExt, StreamExt, TryStreamExt};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::endpoints::{
    build_stream_url, chat_params, manus_params, ApiEnvironment, CHAT_PATH,
    DIARY_QUICK_SAVE_PATH, DIARY_SAVE_PATH, MANUS_PATH, REQUEST_TIMEOUT_SECS,
};
use super::types::{SaveDiaryRequest, SaveDiaryResponse};
use crate::error::{ApiError, ApiResult};
use crate::stream::EventStream;

/// Configuration for the RelaMind client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL including the `/api` prefix
    /// (e.g., "http://localhost:8123/api")
    pub base_url: String,
    /// Timeout for request/response calls. Streams are not subject to it.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiEnvironment::Development.base_url().to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// RelaMind API client
#[derive(Debug, Clone)]
pub struct RelaMindClient {
    http: Client,
    streaming: Client,
    base_url: String,
}

impl RelaMindClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        // A whole-request timeout would cut off long-running streams
        let streaming = Client::builder().build()?;

        Ok(Self {
            http,
            streaming,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL all paths are joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ============ Streaming ============

    /// Open a server-sent event stream at `path` with the given query
    /// parameters.
    ///
    /// The connection is opened on first poll. Every failure, including a
    /// refused connection or an error status, arrives as the stream's single
    /// `Error` event.
    pub fn connect_sse<K, V>(&self, path: &str, params: &[(K, V)]) -> EventStream
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = build_stream_url(&self.base_url, path, params);
        tracing::debug!(url = %url, "Opening SSE connection");

        let request = self
            .streaming
            .get(&url)
            .header(ACCEPT, "text/event-stream");

        let body = open_event_stream(request)
            .into_stream()
            .try_flatten();

        EventStream::new(url, body)
    }

    /// Routed chat: the backend picks plain chat, history lookup or tools
    pub fn chat_with_relamind(&self, message: &str, chat_id: &str) -> EventStream {
        self.connect_sse(CHAT_PATH, &chat_params(message, chat_id))
    }

    /// Autonomous agent for multi-step tasks
    pub fn chat_with_manus(&self, message: &str) -> EventStream {
        self.connect_sse(MANUS_PATH, &manus_params(message))
    }

    // ============ Diary ============

    /// Save a diary record
    pub async fn save_diary(&self, diary: &SaveDiaryRequest) -> ApiResult<SaveDiaryResponse> {
        let request = self.http.post(self.url(DIARY_SAVE_PATH)).json(diary);

        let result = send_json(request).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to save diary");
        }
        result
    }

    /// Save a diary entry from its content alone
    pub async fn quick_save_diary(&self, content: &str) -> ApiResult<SaveDiaryResponse> {
        let request = self
            .http
            .post(self.url(DIARY_QUICK_SAVE_PATH))
            .query(&[("content", content)]);

        let result = send_json(request).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to quick-save diary");
        }
        result
    }
}

/// Send the stream request and check it really is an event stream
async fn open_event_stream(
    request: RequestBuilder,
) -> ApiResult<impl futures_util::Stream<Item = Result<Vec<u8>, ApiError>>> {
    let response = check_status(request.send().await?).await?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.starts_with("text/event-stream") {
        return Err(ApiError::UnexpectedContentType(content_type));
    }

    Ok(response
        .bytes_stream()
        .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(ApiError::from)))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = check_status(request.send().await?).await?;

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Fresh conversation id for the routed chat endpoint
pub fn new_chat_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8123/api");
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_base_url_normalized() {
        let client = RelaMindClient::new(ClientConfig {
            base_url: "http://example.com/api/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(client.base_url(), "http://example.com/api");
        assert_eq!(client.url(DIARY_SAVE_PATH), "http://example.com/api/diary/save");
    }

    #[test]
    fn test_stream_url() {
        let client = RelaMindClient::new(ClientConfig::default()).unwrap();
        let stream = client.chat_with_relamind("你好", "c-1");

        assert_eq!(
            stream.url(),
            "http://localhost:8123/api/ai/chat?message=%E4%BD%A0%E5%A5%BD&chatId=c-1"
        );
    }

    #[test]
    fn test_new_chat_id_unique() {
        let a = new_chat_id();
        assert_eq!(a.len(), 36);
        assert_ne!(a, new_chat_id());
    }
}
