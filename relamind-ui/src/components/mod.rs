//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chat_panel;
pub mod diary_form;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chat_panel::ChatPanel;
pub use diary_form::DiaryForm;
pub use loading::InlineLoading;
pub use nav::Nav;
pub use toast::Toast;
