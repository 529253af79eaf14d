//! Diary Page
//!
//! Entries are stored in the backend's knowledge base, where RelaMind can
//! recall them in later conversations.

use leptos::*;

use crate::components::DiaryForm;

/// Growth diary page
#[component]
pub fn Diary() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"成长日记"</h1>
                <p class="text-gray-400 mt-1">
                    "记录每天的心情与感想，之后可以问 RelaMind：\u{201c}我去年这个时候在做什么？\u{201d}"
                </p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <DiaryForm />
            </section>
        </div>
    }
}
