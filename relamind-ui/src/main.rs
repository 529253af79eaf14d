//! RelaMind Web App
//!
//! AI personal-growth companion built with Leptos (WASM).
//!
//! # Features
//!
//! - Streaming chat with RelaMind (intent-routed)
//! - Multi-step tasks with the Manus super agent
//! - Growth diary
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Routes and page metadata come from the shared `relamind`
//! crate; the backend is reached over `fetch` and `EventSource`.

use leptos::*;

mod api;
mod app;
mod components;
mod head;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
