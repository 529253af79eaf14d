//! State Management
//!
//! Global toast state and the chat transcript model.

pub mod chat;
pub mod global;

pub use chat::{ChatLog, ChatMessage, ChatMode, Role};
pub use global::{provide_global_state, GlobalState};
