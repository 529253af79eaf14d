//! Diary Form Component
//!
//! Form for writing a diary entry with optional mood and tags.

use leptos::*;
use relamind::api::parse_tags;
use relamind::SaveDiaryRequest;

use super::InlineLoading;
use crate::api;
use crate::state::global::GlobalState;

const MOODS: &[(&str, &str)] = &[
    ("😊", "开心"),
    ("😌", "平静"),
    ("😔", "低落"),
    ("😤", "烦躁"),
    ("😴", "疲惫"),
];

/// Diary entry form
#[component]
pub fn DiaryForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (content, set_content) = create_signal(String::new());
    let (mood, set_mood) = create_signal(None::<&'static str>);
    let (tags, set_tags) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = content.get_untracked();
        if text.trim().is_empty() {
            state.show_error("日记内容不能为空");
            return;
        }

        let tag_list = parse_tags(&tags.get_untracked());
        let request = SaveDiaryRequest {
            user_id: None,
            content: text,
            mood: mood.get_untracked().map(str::to_string),
            tags: (!tag_list.is_empty()).then_some(tag_list),
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::save_diary(&request).await {
                Ok(response) if response.success => {
                    state_clone.show_success(
                        response.message.as_deref().unwrap_or("日记保存成功"),
                    );
                    set_content.set(String::new());
                    set_mood.set(None);
                    set_tags.set(String::new());
                }
                Ok(response) => {
                    state_clone.show_error(
                        response.message.as_deref().unwrap_or("日记保存失败，请稍后重试"),
                    );
                }
                Err(e) => {
                    state_clone.show_error(&format!("日记保存失败：{}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Content
            <textarea
                placeholder="今天发生了什么？有什么想记录下来的吗？"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                rows="8"
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none
                       resize-none"
            />

            // Mood selector
            <div class="flex items-center space-x-2">
                <span class="text-sm text-gray-400">"心情："</span>
                {MOODS.iter().map(|&(icon, label)| view! {
                    <button
                        type="button"
                        title=label
                        on:click=move |_| {
                            set_mood.update(|current| {
                                *current = if *current == Some(label) { None } else { Some(label) };
                            })
                        }
                        class=move || if mood.get() == Some(label) {
                            "text-2xl rounded-lg px-2 py-1 bg-primary-600"
                        } else {
                            "text-2xl rounded-lg px-2 py-1 hover:bg-gray-700"
                        }
                    >
                        {icon}
                    </button>
                }).collect_view()}
            </div>

            // Tags
            <input
                type="text"
                placeholder="标签，用逗号分隔（如：工作, 运动）"
                prop:value=move || tags.get()
                on:input=move |ev| set_tags.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get() || content.get().trim().is_empty()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <InlineLoading />
                        <span>"保存中..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"保存日记"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}
