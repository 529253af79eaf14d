//! Chat Transcript
//!
//! Plain data model behind the chat pages: user turns, streamed assistant
//! replies, and how each [`StreamEvent`] changes them.

use relamind::StreamEvent;

/// Which backend a chat page talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatMode {
    /// Intent-routed chat with conversation memory
    RelaMind,
    /// Multi-step agent
    Manus,
}

impl ChatMode {
    /// Text placed between consecutive chunks of one reply.
    ///
    /// RelaMind streams token fragments; Manus streams one step per event.
    fn chunk_separator(self) -> &'static str {
        match self {
            ChatMode::RelaMind => "",
            ChatMode::Manus => "\n",
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            ChatMode::RelaMind => "你好，我是 RelaMind。今天过得怎么样？",
            ChatMode::Manus => "我是 AI 超级智能体，可以帮你规划和完成复杂任务。",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Milliseconds since the epoch
    pub timestamp: i64,
    pub failed: bool,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
            failed: false,
        }
    }
}

/// Messages of one conversation plus whether a reply is streaming
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    pub mode: ChatMode,
    pub messages: Vec<ChatMessage>,
    pub streaming: bool,
    chunks_in_reply: usize,
}

impl ChatLog {
    pub fn new(mode: ChatMode, now: i64) -> Self {
        Self {
            mode,
            messages: vec![ChatMessage::new(Role::Assistant, mode.greeting(), now)],
            streaming: false,
            chunks_in_reply: 0,
        }
    }

    /// Record the user's message and open an empty reply. Returns false
    /// (and changes nothing) while a reply is still streaming or the
    /// message is blank.
    pub fn start_turn(&mut self, message: &str, now: i64) -> bool {
        if self.streaming || message.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::new(Role::User, message, now));
        self.messages.push(ChatMessage::new(Role::Assistant, "", now));
        self.streaming = true;
        self.chunks_in_reply = 0;
        true
    }

    /// Apply one stream event to the open reply. Returns true once the turn
    /// is over.
    pub fn apply(&mut self, event: &StreamEvent) -> bool {
        if !self.streaming {
            return true;
        }

        match event {
            StreamEvent::Message(chunk) => {
                let separator = self.mode.chunk_separator();
                let first = self.chunks_in_reply == 0;
                if let Some(reply) = self.open_reply() {
                    if !first {
                        reply.content.push_str(separator);
                    }
                    reply.content.push_str(chunk);
                }
                self.chunks_in_reply += 1;
                false
            }
            StreamEvent::Done => {
                self.streaming = false;
                true
            }
            StreamEvent::Error(e) => {
                if let Some(reply) = self.open_reply() {
                    reply.failed = true;
                    if reply.content.is_empty() {
                        reply.content = format!("连接中断：{}", e);
                    }
                }
                self.streaming = false;
                true
            }
        }
    }

    /// End the open reply early (user pressed stop or left the page)
    pub fn stop(&mut self) {
        self.streaming = false;
    }

    fn open_reply(&mut self) -> Option<&mut ChatMessage> {
        self.messages
            .last_mut()
            .filter(|message| message.role == Role::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relamind::ApiError;

    #[test]
    fn test_chunks_concatenate_until_done() {
        let mut log = ChatLog::new(ChatMode::RelaMind, 0);
        assert!(log.start_turn("hi", 1));

        assert!(!log.apply(&StreamEvent::Message("hello".into())));
        assert!(!log.apply(&StreamEvent::Message(" world".into())));
        assert!(log.apply(&StreamEvent::Done));

        assert!(!log.streaming);
        assert_eq!(log.messages.len(), 3);
        assert_eq!(log.messages[1].content, "hi");
        assert_eq!(log.messages[2].content, "hello world");
        assert!(!log.messages[2].failed);
    }

    #[test]
    fn test_manus_steps_on_separate_lines() {
        let mut log = ChatLog::new(ChatMode::Manus, 0);
        log.start_turn("plan", 1);
        log.apply(&StreamEvent::Message("Step 1".into()));
        log.apply(&StreamEvent::Message("Step 2".into()));

        assert_eq!(log.messages.last().unwrap().content, "Step 1\nStep 2");
    }

    #[test]
    fn test_error_marks_reply_failed() {
        let mut log = ChatLog::new(ChatMode::RelaMind, 0);
        log.start_turn("hi", 1);

        assert!(log.apply(&StreamEvent::Error(ApiError::Disconnected)));
        let reply = log.messages.last().unwrap();
        assert!(reply.failed);
        assert!(reply.content.contains("Stream closed by server"));
        assert!(!log.streaming);
    }

    #[test]
    fn test_error_keeps_partial_reply() {
        let mut log = ChatLog::new(ChatMode::RelaMind, 0);
        log.start_turn("hi", 1);
        log.apply(&StreamEvent::Message("partial".into()));
        log.apply(&StreamEvent::Error(ApiError::Disconnected));

        assert_eq!(log.messages.last().unwrap().content, "partial");
    }

    #[test]
    fn test_no_new_turn_while_streaming() {
        let mut log = ChatLog::new(ChatMode::RelaMind, 0);
        assert!(!log.start_turn("   ", 1));
        assert!(log.start_turn("first", 1));
        assert!(!log.start_turn("second", 2));
        assert_eq!(log.messages.len(), 3);

        log.stop();
        assert!(log.start_turn("second", 2));
    }

    #[test]
    fn test_events_after_turn_ignored() {
        let mut log = ChatLog::new(ChatMode::RelaMind, 0);
        log.start_turn("hi", 1);
        log.apply(&StreamEvent::Done);

        assert!(log.apply(&StreamEvent::Message("late".into())));
        assert_eq!(log.messages.last().unwrap().content, "");
    }
}
