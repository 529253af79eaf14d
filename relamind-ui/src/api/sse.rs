//! EventSource Lifecycle
//!
//! What to deliver, and whether to close, for each `EventSource` callback.
//! Kept free of browser types so it can be tested natively.

use relamind::{ApiError, StreamEvent};

/// Per-connection state shared by the `open`, `message` and `error` handlers
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SseLifecycle {
    opened: bool,
    finished: bool,
}

impl SseLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The browser reported the stream as open
    pub fn on_open(&mut self) {
        self.opened = true;
    }

    /// A `message` event arrived. Non-text payloads and anything after the
    /// terminal event are dropped.
    pub fn on_message(&mut self, data: Option<String>) -> Option<StreamEvent> {
        if self.finished {
            return None;
        }

        let event = StreamEvent::from_data(data?);
        self.finished = event.is_terminal();
        Some(event)
    }

    /// An `error` event arrived. Only the first one after an unfinished
    /// stream is reported.
    ///
    /// The browser moves to `CONNECTING` both when an open stream drops and
    /// when the first attempt fails, so only `onopen` tells the two apart.
    pub fn on_error(&mut self) -> Option<StreamEvent> {
        if self.finished {
            return None;
        }
        self.finished = true;

        let error = if self.opened {
            ApiError::Disconnected
        } else {
            ApiError::Network("EventSource connection failed".to_string())
        };
        Some(StreamEvent::Error(error))
    }

    /// Whether the terminal event has been delivered
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_then_done() {
        let mut sse = SseLifecycle::new();
        sse.on_open();

        assert_eq!(
            sse.on_message(Some("hello".into())),
            Some(StreamEvent::Message("hello".into()))
        );
        assert!(!sse.is_finished());
        assert_eq!(sse.on_message(Some("[DONE]".into())), Some(StreamEvent::Done));
        assert!(sse.is_finished());
    }

    #[test]
    fn test_nothing_after_done() {
        let mut sse = SseLifecycle::new();
        sse.on_open();
        sse.on_message(Some("[DONE]".into()));

        // Server closing the stream after [DONE] fires onerror
        assert_eq!(sse.on_error(), None);
        assert_eq!(sse.on_message(Some("late".into())), None);
    }

    #[test]
    fn test_single_error() {
        let mut sse = SseLifecycle::new();
        sse.on_open();
        sse.on_message(Some("partial".into()));

        assert_eq!(
            sse.on_error(),
            Some(StreamEvent::Error(ApiError::Disconnected))
        );
        assert!(sse.is_finished());
        assert_eq!(sse.on_error(), None);
        assert_eq!(sse.on_message(Some("after".into())), None);
    }

    #[test]
    fn test_failure_before_open_is_network_error() {
        let mut sse = SseLifecycle::new();

        assert!(matches!(
            sse.on_error(),
            Some(StreamEvent::Error(ApiError::Network(_)))
        ));
    }

    #[test]
    fn test_non_text_payload_dropped() {
        let mut sse = SseLifecycle::new();
        sse.on_open();

        assert_eq!(sse.on_message(None), None);
        assert!(!sse.is_finished());
    }
}
