//! Endpoints
//!
//! Base URL selection, backend paths and query string construction.

use serde::{Deserialize, Serialize};

/// Base URL for a co-located deployment (frontend and backend on one origin)
pub const PRODUCTION_API_BASE: &str = "/api";

/// Base URL of a locally running backend
pub const DEVELOPMENT_API_BASE: &str = "http://localhost:8123/api";

/// Timeout for request/response calls. Streams have none.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

pub const CHAT_PATH: &str = "/ai/chat";
pub const MANUS_PATH: &str = "/ai/manus";
pub const DIARY_SAVE_PATH: &str = "/diary/save";
pub const DIARY_QUICK_SAVE_PATH: &str = "/diary/quick-save";

/// Deployment environment, which selects the API base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    Production,
    #[default]
    Development,
}

impl ApiEnvironment {
    /// Base URL for this environment
    pub fn base_url(self) -> &'static str {
        match self {
            ApiEnvironment::Production => PRODUCTION_API_BASE,
            ApiEnvironment::Development => DEVELOPMENT_API_BASE,
        }
    }
}

impl std::str::FromStr for ApiEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(ApiEnvironment::Production),
            "development" | "dev" => Ok(ApiEnvironment::Development),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

/// Percent-encode each key and value and join the pairs with `&`, keeping
/// the given order.
pub fn build_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Full URL for a streaming endpoint: `{base}{path}?{query}`
pub fn build_stream_url<K, V>(base: &str, path: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    format!(
        "{}{}?{}",
        base.trim_end_matches('/'),
        path,
        build_query(params)
    )
}

/// Query parameters for the routed chat endpoint
pub fn chat_params<'a>(message: &'a str, chat_id: &'a str) -> [(&'static str, &'a str); 2] {
    [("message", message), ("chatId", chat_id)]
}

/// Query parameters for the agent endpoint
pub fn manus_params(message: &str) -> [(&'static str, &str); 1] {
    [("message", message)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_url() {
        assert_eq!(ApiEnvironment::Production.base_url(), "/api");
        assert_eq!(
            ApiEnvironment::Development.base_url(),
            "http://localhost:8123/api"
        );
        assert_eq!("PROD".parse::<ApiEnvironment>(), Ok(ApiEnvironment::Production));
        assert!("staging".parse::<ApiEnvironment>().is_err());
    }

    #[test]
    fn test_query_one_pair_per_param_in_order() {
        let params = [
            ("message", "你好 world"),
            ("chatId", "a&b=c"),
            ("z", ""),
        ];
        let query = build_query(&params);
        let pairs: Vec<&str> = query.split('&').collect();

        assert_eq!(pairs.len(), params.len());
        assert_eq!(pairs[0], "message=%E4%BD%A0%E5%A5%BD%20world");
        assert_eq!(pairs[1], "chatId=a%26b%3Dc");
        assert_eq!(pairs[2], "z=");
    }

    #[test]
    fn test_query_keeps_unreserved_characters() {
        assert_eq!(build_query(&[("k-_.~", "A-z_0.9~")]), "k-_.~=A-z_0.9~");
    }

    #[test]
    fn test_query_encodes_keys() {
        assert_eq!(build_query(&[("a b", "1")]), "a%20b=1");
    }

    #[test]
    fn test_build_stream_url() {
        let url = build_stream_url("/api", CHAT_PATH, &chat_params("hi", "42"));
        assert_eq!(url, "/api/ai/chat?message=hi&chatId=42");

        let url = build_stream_url(
            "http://localhost:8123/api/",
            MANUS_PATH,
            &manus_params("plan a trip"),
        );
        assert_eq!(url, "http://localhost:8123/api/ai/manus?message=plan%20a%20trip");
    }

    #[test]
    fn test_build_stream_url_owned_params() {
        let params = vec![("message".to_string(), "x".to_string())];
        assert_eq!(build_stream_url("/api", "/p", &params), "/api/p?message=x");
    }
}
