//! RelaMind API
//!
//! Endpoint definitions and request/response bodies shared by every client,
//! and (with the `client` feature) the native HTTP client.
//!
//! ## Endpoints
//!
//! - `GET  /ai/chat?message=&chatId=` - routed chat, server-sent events
//! - `GET  /ai/manus?message=` - autonomous agent, server-sent events
//! - `POST /diary/save` - save a diary record (JSON body)
//! - `POST /diary/quick-save?content=` - save a diary entry from its content

#[cfg(feature = "client")]
mod client;
mod endpoints;
mod types;

#[cfg(feature = "client")]
pub use client::{new_chat_id, ClientConfig, RelaMindClient};
pub use endpoints::{
    build_query, build_stream_url, chat_params, manus_params, ApiEnvironment, CHAT_PATH,
    DEVELOPMENT_API_BASE, DIARY_QUICK_SAVE_PATH, DIARY_SAVE_PATH, MANUS_PATH,
    PRODUCTION_API_BASE, REQUEST_TIMEOUT_SECS,
};
pub use types::{parse_tags, SaveDiaryRequest, SaveDiaryResponse};
