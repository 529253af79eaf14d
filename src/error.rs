//! Client Error Types
//!
//! A single error enum shared by the native client and the browser UI. Every
//! failure, whether network, server-side or malformed payload, surfaces
//! through it.

use thiserror::Error;

/// Errors produced by the RelaMind API client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("RelaMind backend unavailable")]
    Unavailable,

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Expected text/event-stream, got {0:?}")]
    UnexpectedContentType(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Stream closed by server")]
    Disconnected,
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(feature = "client")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Unavailable
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");
        assert_eq!(ApiError::Disconnected.to_string(), "Stream closed by server");
    }
}
