//! Backend API
//!
//! `fetch` calls for the diary and `EventSource` streams for chat.

mod client;
mod sse;

pub use client::{
    api_base, chat_with_manus, chat_with_relamind, connect_sse, quick_save_diary, save_diary,
    SseConnection,
};
