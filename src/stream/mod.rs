//! Streaming Messages
//!
//! Event model for the chat endpoints. Each server-sent payload becomes a
//! [`StreamEvent`]; the literal `[DONE]` payload marks end-of-stream.
//!
//! The browser parses the wire format itself; native callers go through
//! [`SseDecoder`] and, with the `client` feature, [`EventStream`].

mod decoder;
#[cfg(feature = "client")]
mod event_stream;

pub use decoder::SseDecoder;
#[cfg(feature = "client")]
pub use event_stream::EventStream;

use crate::error::ApiError;

/// Payload the backend sends to signal completion
pub const DONE_MARKER: &str = "[DONE]";

/// One item delivered by a streaming connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A raw text chunk, handed over undecoded
    Message(String),
    /// The `[DONE]` sentinel arrived
    Done,
    /// The transport failed; the connection has been closed
    Error(ApiError),
}

impl StreamEvent {
    /// Classify a received payload
    pub fn from_data(data: impl Into<String>) -> Self {
        let data = data.into();
        if data == DONE_MARKER {
            StreamEvent::Done
        } else {
            StreamEvent::Message(data)
        }
    }

    /// Whether no further events follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Done | StreamEvent::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_payloads() {
        assert_eq!(StreamEvent::from_data("hello"), StreamEvent::Message("hello".into()));
        assert_eq!(StreamEvent::from_data("[DONE]"), StreamEvent::Done);
        // Only the exact marker ends the stream
        assert_eq!(
            StreamEvent::from_data(" [DONE]"),
            StreamEvent::Message(" [DONE]".into())
        );
        assert_eq!(
            StreamEvent::from_data("[done]"),
            StreamEvent::Message("[done]".into())
        );
    }

    #[test]
    fn test_terminal_events() {
        assert!(!StreamEvent::Message(String::new()).is_terminal());
        assert!(StreamEvent::Done.is_terminal());
        assert!(StreamEvent::Error(ApiError::Disconnected).is_terminal());
    }
}
