//! # RelaMind
//!
//! Client side of the RelaMind AI companion: the application's route table
//! and navigation guard, and a thin REST/SSE client for the RelaMind backend.
//!
//! ## Modules
//!
//! - [`routes`]: Static route table and the title-setting navigation guard
//! - [`api`]: Endpoints, query strings, diary bodies and the native client
//! - [`stream`]: Server-sent event model and decoder
//! - [`config`]: TOML/environment configuration (`client` feature)
//!
//! Without default features the crate builds for `wasm32-unknown-unknown`
//! and is shared with the `relamind-ui` web app.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use relamind::{ClientConfig, RelaMindClient, SaveDiaryRequest, StreamEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RelaMindClient::new(ClientConfig::default())?;
//!
//!     // Stream a routed chat reply
//!     let mut events = client.chat_with_relamind("今天有点累", &relamind::new_chat_id());
//!     while let Some(event) = events.next().await {
//!         match event {
//!             StreamEvent::Message(chunk) => print!("{}", chunk),
//!             StreamEvent::Done => break,
//!             StreamEvent::Error(e) => return Err(e.into()),
//!         }
//!     }
//!
//!     // Save a diary entry
//!     let saved = client
//!         .save_diary(&SaveDiaryRequest::new("today was good").mood("calm"))
//!         .await?;
//!     println!("saved: {}", saved.success);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "client")]
pub mod config;
pub mod error;
pub mod routes;
pub mod stream;

// Re-export top-level types for convenience
pub use api::{
    build_stream_url, ApiEnvironment, SaveDiaryRequest, SaveDiaryResponse, CHAT_PATH, MANUS_PATH,
};

#[cfg(feature = "client")]
pub use api::{new_chat_id, ClientConfig, RelaMindClient};

pub use error::{ApiError, ApiResult};

pub use routes::{
    before_each, find_route, DocumentHead, MemoryHead, Navigation, RouteEntry, RouteMeta, View,
    ROUTES,
};

pub use stream::{SseDecoder, StreamEvent, DONE_MARKER};

#[cfg(feature = "client")]
pub use stream::EventStream;

#[cfg(feature = "client")]
pub use config::{Config, ConfigError, LoggingConfig};
