//! Super Agent Page

use leptos::*;

use crate::components::ChatPanel;
use crate::state::chat::ChatMode;

/// Multi-step tasks with the Manus agent
#[component]
pub fn SuperAgent() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"AI 超级智能体"</h1>
                <p class="text-gray-400 mt-1">
                    "自主规划复杂任务，多步骤推理和执行"
                </p>
            </div>

            <ChatPanel mode=ChatMode::Manus />
        </div>
    }
}
