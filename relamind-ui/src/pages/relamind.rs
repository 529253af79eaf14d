//! RelaMind Chat Page

use leptos::*;

use crate::components::ChatPanel;
use crate::state::chat::ChatMode;

/// Intent-routed chat with RelaMind
#[component]
pub fn RelaMind() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"RelaMind"</h1>
                <p class="text-gray-400 mt-1">"与 RelaMind 对话，记录成长，理解自己"</p>
            </div>

            <ChatPanel mode=ChatMode::RelaMind />
        </div>
    }
}
