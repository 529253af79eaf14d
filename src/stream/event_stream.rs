//! Native SSE connection exposed as a `Stream` of [`StreamEvent`]s.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures_util::stream::{self, BoxStream, FusedStream};
use futures_util::{Stream, StreamExt};

use super::{SseDecoder, StreamEvent};
use crate::error::ApiError;

/// A live streaming connection.
///
/// Yields `Message` for each payload, then exactly one terminal `Done` or
/// `Error`, after which the connection is closed and the stream ends.
/// Dropping the stream or calling [`EventStream::close`] closes it early.
pub struct EventStream {
    url: String,
    body: Option<BoxStream<'static, Result<Vec<u8>, ApiError>>>,
    decoder: SseDecoder,
    pending: VecDeque<String>,
}

impl EventStream {
    /// Wrap a body of raw byte chunks
    pub fn new<S, B, E>(url: impl Into<String>, body: S) -> Self
    where
        S: Stream<Item = Result<B, E>> + Send + 'static,
        B: AsRef<[u8]> + 'static,
        E: Into<ApiError> + 'static,
    {
        let body = body
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.as_ref().to_vec())
                    .map_err(Into::<ApiError>::into)
            })
            .boxed();

        Self {
            url: url.into(),
            body: Some(body),
            decoder: SseDecoder::new(),
            pending: VecDeque::new(),
        }
    }

    /// A stream whose connection failed before any data arrived
    pub fn failed(url: impl Into<String>, error: ApiError) -> Self {
        Self::new(url, stream::once(async move { Err::<Vec<u8>, _>(error) }))
    }

    /// URL this stream is connected to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the underlying connection has been released
    pub fn is_closed(&self) -> bool {
        self.body.is_none()
    }

    /// Close the connection. Events not yet yielded are discarded.
    pub fn close(&mut self) {
        if self.body.take().is_some() {
            tracing::debug!(url = %self.url, "Closed SSE connection");
        }
        self.pending.clear();
        self.decoder.reset();
    }
}

impl Stream for EventStream {
    type Item = StreamEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<StreamEvent>> {
        let this = self.get_mut();

        loop {
            if let Some(data) = this.pending.pop_front() {
                let event = StreamEvent::from_data(data);
                if event.is_terminal() {
                    this.close();
                }
                return Poll::Ready(Some(event));
            }

            let Some(body) = this.body.as_mut() else {
                return Poll::Ready(None);
            };

            match ready!(body.poll_next_unpin(cx)) {
                Some(Ok(chunk)) => {
                    let events = this.decoder.feed(&chunk);
                    this.pending.extend(events);
                }
                Some(Err(e)) => {
                    tracing::warn!(url = %this.url, error = %e, "SSE connection failed");
                    this.close();
                    return Poll::Ready(Some(StreamEvent::Error(e)));
                }
                None => {
                    tracing::warn!(url = %this.url, "SSE connection ended before [DONE]");
                    this.close();
                    return Poll::Ready(Some(StreamEvent::Error(ApiError::Disconnected)));
                }
            }
        }
    }
}

impl FusedStream for EventStream {
    fn is_terminated(&self) -> bool {
        self.body.is_none() && self.pending.is_empty()
    }
}

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream")
            .field("url", &self.url)
            .field("closed", &self.is_closed())
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&'static str]) -> EventStream {
        let items: Vec<Result<&'static [u8], ApiError>> =
            parts.iter().map(|p| Ok(p.as_bytes())).collect();
        EventStream::new("http://test/ai/chat", stream::iter(items))
    }

    #[tokio::test]
    async fn test_messages_then_done() {
        let mut events = chunks(&["data: hello\n\n", "data: world\n\ndata: [DONE]\n\n"]);

        assert_eq!(events.next().await, Some(StreamEvent::Message("hello".into())));
        assert_eq!(events.next().await, Some(StreamEvent::Message("world".into())));
        assert_eq!(events.next().await, Some(StreamEvent::Done));
        assert!(events.is_closed());
        assert_eq!(events.next().await, None);
        assert!(events.is_terminated());
    }

    #[tokio::test]
    async fn test_nothing_after_done() {
        let mut events = chunks(&["data: [DONE]\n\ndata: late\n\n"]);

        assert_eq!(events.next().await, Some(StreamEvent::Done));
        assert_eq!(events.next().await, None);
    }

    #[tokio::test]
    async fn test_transport_error_is_reported_once() {
        let items: Vec<Result<&'static [u8], ApiError>> = vec![
            Ok(b"data: partial\n\n".as_slice()),
            Err(ApiError::Network("reset".into())),
            Ok(b"data: never\n\n".as_slice()),
        ];
        let mut events = EventStream::new("http://test", stream::iter(items));

        assert_eq!(events.next().await, Some(StreamEvent::Message("partial".into())));
        assert_eq!(
            events.next().await,
            Some(StreamEvent::Error(ApiError::Network("reset".into())))
        );
        assert!(events.is_closed());
        assert_eq!(events.next().await, None);
        assert_eq!(events.next().await, None);
    }

    #[tokio::test]
    async fn test_eof_without_done_is_disconnect() {
        let mut events = chunks(&["data: only\n\n"]);

        assert_eq!(events.next().await, Some(StreamEvent::Message("only".into())));
        assert_eq!(
            events.next().await,
            Some(StreamEvent::Error(ApiError::Disconnected))
        );
        assert_eq!(events.next().await, None);
    }

    #[tokio::test]
    async fn test_close_early() {
        let mut events = chunks(&["data: a\n\ndata: b\n\n"]);

        assert_eq!(events.next().await, Some(StreamEvent::Message("a".into())));
        events.close();
        assert!(events.is_closed());
        assert_eq!(events.next().await, None);
    }

    #[tokio::test]
    async fn test_failed_stream() {
        let events = EventStream::failed("http://test", ApiError::Unavailable);
        let collected: Vec<_> = events.collect().await;
        assert_eq!(collected, vec![StreamEvent::Error(ApiError::Unavailable)]);
    }
}
