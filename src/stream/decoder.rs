//! `text/event-stream` line decoder.
//!
//! Turns raw body chunks into the data payload of each dispatched event.
//! Chunks may split lines, CRLF pairs and multi-byte characters anywhere.

/// Incremental decoder for the server-sent events wire format
#[derive(Debug, Default)]
pub struct SseDecoder {
    line: Vec<u8>,
    data: String,
    has_data: bool,
    after_cr: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of the response body, returning the payloads of every
    /// event completed by it, in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut events = Vec::new();

        for &byte in chunk {
            if self.after_cr {
                self.after_cr = false;
                if byte == b'\n' {
                    continue;
                }
            }

            match byte {
                b'\n' | b'\r' => {
                    self.after_cr = byte == b'\r';
                    let line = std::mem::take(&mut self.line);
                    if let Some(data) = self.process_line(&line) {
                        events.push(data);
                    }
                }
                _ => self.line.push(byte),
            }
        }

        events
    }

    /// Discard any partially received line or event
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn process_line(&mut self, line: &[u8]) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }

        // Comment
        if line[0] == b':' {
            return None;
        }

        let line = String::from_utf8_lossy(line);
        let (field, value) = match line.find(':') {
            Some(idx) => {
                let value = &line[idx + 1..];
                (&line[..idx], value.strip_prefix(' ').unwrap_or(value))
            }
            None => (line.as_ref(), ""),
        };

        // event, id and retry carry nothing the client uses
        if field == "data" {
            if self.has_data {
                self.data.push('\n');
            }
            self.data.push_str(value);
            self.has_data = true;
        }

        None
    }

    fn dispatch(&mut self) -> Option<String> {
        if !self.has_data {
            return None;
        }
        self.has_data = false;
        Some(std::mem::take(&mut self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_events() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: hello\n\ndata: world\n\ndata: [DONE]\n\n");
        assert_eq!(events, vec!["hello", "world", "[DONE]"]);
    }

    #[test]
    fn test_multiline_data_joined() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: first\ndata: second\n\n");
        assert_eq!(events, vec!["first\nsecond"]);
    }

    #[test]
    fn test_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"da").is_empty());
        assert!(decoder.feed(b"ta: hel").is_empty());
        assert!(decoder.feed(b"lo\n").is_empty());
        assert_eq!(decoder.feed(b"\n"), vec!["hello"]);
    }

    #[test]
    fn test_split_multibyte_character() {
        let bytes = "data: 你好\n\n".as_bytes();
        let mut decoder = SseDecoder::new();

        // Split inside the first character
        assert!(decoder.feed(&bytes[..7]).is_empty());
        assert_eq!(decoder.feed(&bytes[7..]), vec!["你好"]);
    }

    #[test]
    fn test_crlf_and_cr_line_endings() {
        let mut decoder = SseDecoder::new();
        assert_eq!(decoder.feed(b"data: a\r\n\r\ndata: b\r\rdata: c\n\n"), vec!["a", "b", "c"]);

        // CR at the end of one chunk, LF at the start of the next
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"data: x\r").is_empty());
        assert_eq!(decoder.feed(b"\n\r\n"), vec!["x"]);
    }

    #[test]
    fn test_comments_and_other_fields_ignored() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b": keep-alive\n\nevent: message\nid: 7\nretry: 1000\ndata: x\n\n");
        assert_eq!(events, vec!["x"]);
    }

    #[test]
    fn test_only_one_leading_space_stripped() {
        let mut decoder = SseDecoder::new();
        assert_eq!(decoder.feed(b"data:  two\n\ndata:none\n\n"), vec![" two", "none"]);
    }

    #[test]
    fn test_empty_data_field_dispatches_empty_payload() {
        let mut decoder = SseDecoder::new();
        assert_eq!(decoder.feed(b"data\n\ndata:\n\n"), vec!["", ""]);
    }

    #[test]
    fn test_blank_lines_without_data_dispatch_nothing() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"\n\n\nevent: ping\n\n").is_empty());
    }

    #[test]
    fn test_reset_discards_partial_event() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"data: partial\n").is_empty());
        decoder.reset();
        assert!(decoder.feed(b"\n").is_empty());
    }
}
