//! Chat Panel Component
//!
//! Transcript plus input box for the streaming chat pages.

use leptos::*;
use relamind::StreamEvent;

use super::loading::TypingIndicator;
use crate::api::{self, SseConnection};
use crate::state::chat::{ChatLog, ChatMessage, ChatMode, Role};
use crate::state::global::GlobalState;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Streaming chat against RelaMind or the Manus agent
#[component]
pub fn ChatPanel(mode: ChatMode) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let log = create_rw_signal(ChatLog::new(mode, now_ms()));
    let (input, set_input) = create_signal(String::new());
    // One conversation per page visit
    let chat_id = store_value(uuid::Uuid::new_v4().to_string());
    let connection = store_value(None::<SseConnection>);

    // Leaving the page closes any open stream
    on_cleanup(move || {
        let _ = connection.try_update_value(|conn| conn.take());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let message = input.get_untracked();
        let started = log
            .try_update(|log| log.start_turn(&message, now_ms()))
            .unwrap_or(false);
        if !started {
            return;
        }
        set_input.set(String::new());

        let state_for_events = state.clone();
        let on_event = move |event: StreamEvent| {
            if let StreamEvent::Error(e) = &event {
                state_for_events.show_error(&format!("连接中断：{}", e));
            }
            log.update(|log| {
                log.apply(&event);
            });
        };

        let result = match mode {
            ChatMode::RelaMind => {
                api::chat_with_relamind(&message, &chat_id.get_value(), on_event)
            }
            ChatMode::Manus => api::chat_with_manus(&message, on_event),
        };

        match result {
            // Replacing the previous handle drops its (already closed) stream
            Ok(conn) => connection.set_value(Some(conn)),
            Err(e) => {
                state.show_error(&e.to_string());
                log.update(|log| {
                    log.apply(&StreamEvent::Error(e));
                });
            }
        }
    };

    let on_stop = move |_| {
        connection.with_value(|conn| {
            if let Some(conn) = conn {
                conn.close();
            }
        });
        log.update(|log| log.stop());
    };

    let streaming = move || log.with(|log| log.streaming);
    let placeholder = match mode {
        ChatMode::RelaMind => "说说你今天的感受……",
        ChatMode::Manus => "描述你想完成的任务……",
    };

    view! {
        <div class="flex flex-col h-[70vh] bg-gray-800 rounded-xl">
            // Transcript
            <div class="flex-1 overflow-y-auto p-6 space-y-4">
                {move || log.with(|log| {
                    let last = log.messages.len().saturating_sub(1);
                    log.messages
                        .iter()
                        .enumerate()
                        .map(|(i, message)| {
                            let typing = log.streaming && i == last && message.content.is_empty();
                            view! { <MessageBubble message=message.clone() typing=typing /> }
                        })
                        .collect_view()
                })}
            </div>

            // Input
            <form on:submit=on_submit class="border-t border-gray-700 p-4 flex space-x-3">
                <textarea
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    rows="2"
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           resize-none"
                />

                {move || if streaming() {
                    view! {
                        <button
                            type="button"
                            on:click=on_stop
                            class="px-6 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium
                                   transition-colors"
                        >
                            "停止"
                        </button>
                    }.into_view()
                } else {
                    view! {
                        <button
                            type="submit"
                            disabled=move || input.get().trim().is_empty()
                            class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            "发送"
                        </button>
                    }.into_view()
                }}
            </form>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage, typing: bool) -> impl IntoView {
    let (align, bubble) = match (message.role, message.failed) {
        (Role::User, _) => ("justify-end", "bg-primary-600 text-white"),
        (Role::Assistant, false) => ("justify-start", "bg-gray-700 text-gray-100"),
        (Role::Assistant, true) => ("justify-start", "bg-gray-700 text-red-300 border border-red-500"),
    };

    let time = chrono::DateTime::from_timestamp_millis(message.timestamp)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default();

    view! {
        <div class=format!("flex {}", align)>
            <div class=format!("max-w-[75%] rounded-2xl px-4 py-3 {}", bubble)>
                {if typing {
                    view! { <TypingIndicator /> }.into_view()
                } else {
                    view! {
                        <p class="whitespace-pre-wrap break-words">{message.content}</p>
                    }.into_view()
                }}
                <div class="text-xs text-gray-400 mt-1 text-right">{time}</div>
            </div>
        </div>
    }
}
