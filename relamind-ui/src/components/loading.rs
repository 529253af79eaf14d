//! Loading Component
//!
//! Spinners shown while a reply streams or a form submits.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Animated dots for a reply that has not produced text yet
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <span class="inline-flex space-x-1 text-gray-400 animate-pulse">
            <span>"●"</span>
            <span>"●"</span>
            <span>"●"</span>
        </span>
    }
}
