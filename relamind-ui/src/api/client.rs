//! HTTP API Client
//!
//! Functions for communicating with the RelaMind backend.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use relamind::api::{
    build_stream_url, chat_params, manus_params, ApiEnvironment, CHAT_PATH,
    DIARY_QUICK_SAVE_PATH, DIARY_SAVE_PATH, MANUS_PATH, REQUEST_TIMEOUT_SECS,
};
use relamind::{ApiError, ApiResult, SaveDiaryRequest, SaveDiaryResponse, StreamEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, EventSource, MessageEvent};

use super::sse::SseLifecycle;

/// API base URL, fixed at build time.
///
/// `RELAMIND_ENV=production` selects `/api` on the app's own origin,
/// `development` the local backend. Unset, debug builds use development.
pub fn api_base() -> &'static str {
    let default_env = if cfg!(debug_assertions) {
        ApiEnvironment::Development
    } else {
        ApiEnvironment::Production
    };

    option_env!("RELAMIND_ENV")
        .and_then(|env| env.parse().ok())
        .unwrap_or(default_env)
        .base_url()
}

// ============ Streaming ============

/// A live `EventSource` connection.
///
/// Closing (or dropping) the handle is the only way to cancel a stream.
pub struct SseConnection {
    source: EventSource,
    _on_open: Closure<dyn FnMut(web_sys::Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

impl SseConnection {
    /// Close the connection. No further events are delivered.
    pub fn close(&self) {
        self.source.close();
    }

    /// Whether the browser still holds the connection open (or is opening it)
    pub fn is_open(&self) -> bool {
        self.source.ready_state() != EventSource::CLOSED
    }
}

impl Drop for SseConnection {
    fn drop(&mut self) {
        self.source.close();
        self.source.set_onopen(None);
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
    }
}

/// Open an event stream at `path` and deliver each event to `on_event`.
///
/// `[DONE]` arrives as `StreamEvent::Done`. Any transport error arrives as a
/// single `StreamEvent::Error`. The connection is closed after either, so the
/// browser never reconnects and replays the request.
pub fn connect_sse<K, V, F>(path: &str, params: &[(K, V)], on_event: F) -> ApiResult<SseConnection>
where
    K: AsRef<str>,
    V: AsRef<str>,
    F: FnMut(StreamEvent) + 'static,
{
    open_event_source(&build_stream_url(api_base(), path, params), on_event)
}

fn open_event_source<F>(url: &str, on_event: F) -> ApiResult<SseConnection>
where
    F: FnMut(StreamEvent) + 'static,
{
    let source = EventSource::new(url)
        .map_err(|e| ApiError::Network(format!("EventSource error: {:?}", e)))?;

    let lifecycle = Rc::new(RefCell::new(SseLifecycle::new()));
    let handler = Rc::new(RefCell::new(on_event));

    // On open
    let lifecycle_clone = Rc::clone(&lifecycle);
    let on_open = Closure::wrap(Box::new(move |_: web_sys::Event| {
        lifecycle_clone.borrow_mut().on_open();
    }) as Box<dyn FnMut(web_sys::Event)>);
    source.set_onopen(Some(on_open.as_ref().unchecked_ref()));

    // On message
    let lifecycle_clone = Rc::clone(&lifecycle);
    let handler_clone = Rc::clone(&handler);
    let source_clone = source.clone();
    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Some(event) = lifecycle_clone
            .borrow_mut()
            .on_message(event.data().as_string())
        else {
            return;
        };
        if event.is_terminal() {
            source_clone.close();
        }
        (&mut *handler_clone.borrow_mut())(event);
    }) as Box<dyn FnMut(MessageEvent)>);
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    // On error
    let lifecycle_clone = Rc::clone(&lifecycle);
    let handler_clone = Rc::clone(&handler);
    let source_clone = source.clone();
    let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
        source_clone.close();

        let Some(event) = lifecycle_clone.borrow_mut().on_error() else {
            return;
        };
        if let StreamEvent::Error(error) = &event {
            web_sys::console::error_1(
                &format!("SSE error on {}: {}", source_clone.url(), error).into(),
            );
        }
        (&mut *handler_clone.borrow_mut())(event);
    }) as Box<dyn FnMut(web_sys::Event)>);
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    Ok(SseConnection {
        source,
        _on_open: on_open,
        _on_message: on_message,
        _on_error: on_error,
    })
}

/// Routed chat with conversation memory
pub fn chat_with_relamind<F>(message: &str, chat_id: &str, on_event: F) -> ApiResult<SseConnection>
where
    F: FnMut(StreamEvent) + 'static,
{
    connect_sse(CHAT_PATH, &chat_params(message, chat_id), on_event)
}

/// Manus agent for multi-step tasks
pub fn chat_with_manus<F>(message: &str, on_event: F) -> ApiResult<SseConnection>
where
    F: FnMut(StreamEvent) + 'static,
{
    connect_sse(MANUS_PATH, &manus_params(message), on_event)
}

// ============ Diary ============

/// Save a diary record
pub async fn save_diary(diary: &SaveDiaryRequest) -> ApiResult<SaveDiaryResponse> {
    let builder = Request::post(&format!("{}{}", api_base(), DIARY_SAVE_PATH));
    let result = send_with_timeout(builder, |builder| {
        builder
            .json(diary)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))
    })
    .await;

    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Failed to save diary: {}", e).into());
    }
    result
}

/// Save a diary entry from its content alone
pub async fn quick_save_diary(content: &str) -> ApiResult<SaveDiaryResponse> {
    let builder = Request::post(&format!("{}{}", api_base(), DIARY_QUICK_SAVE_PATH))
        .query([("content", content)]);
    let result = send_with_timeout(builder, |builder| {
        builder
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))
    })
    .await;

    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Failed to quick-save diary: {}", e).into());
    }
    result
}

/// Send a request, aborting it after the fixed request timeout
async fn send_with_timeout<F>(builder: RequestBuilder, finish: F) -> ApiResult<SaveDiaryResponse>
where
    F: FnOnce(RequestBuilder) -> ApiResult<Request>,
{
    let controller =
        AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let signal = controller.signal();
    let request = finish(builder.abort_signal(Some(&signal)))?;

    // Dropping the timer on completion cancels it
    let _timer = gloo_timers::callback::Timeout::new(REQUEST_TIMEOUT_SECS as u32 * 1000, move || {
        controller.abort();
    });

    let response = match request.send().await {
        Ok(response) => response,
        Err(_) if signal.aborted() => return Err(ApiError::Timeout),
        Err(e) => return Err(ApiError::Network(e.to_string())),
    };

    read_json(response).await
}

async fn read_json(response: Response) -> ApiResult<SaveDiaryResponse> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
