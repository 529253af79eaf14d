//! Pages
//!
//! Top-level page components for each route.

pub mod diary;
pub mod home;
pub mod legal;
pub mod relamind;
pub mod super_agent;

pub use diary::Diary;
pub use home::Home;
pub use legal::{Privacy, Terms};
pub use relamind::RelaMind;
pub use super_agent::SuperAgent;
