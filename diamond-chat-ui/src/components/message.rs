//! Message Bubble Component

use leptos::*;

use crate::format::format_time;
use crate::state::Message;

/// A single chat bubble; bot messages on the left, user messages on the right
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let (wrapper_class, bubble_class) = if message.is_bot {
        ("flex justify-start", "bg-white text-gray-900 rounded-bl-none")
    } else {
        ("flex justify-end", "bg-indigo-600 text-white rounded-br-none")
    };

    view! {
        <div class=wrapper_class>
            <div class=format!("max-w-[75%] rounded-2xl px-4 py-2 shadow {}", bubble_class)>
                <div class="whitespace-pre-wrap">{message.content}</div>
                <div class="text-xs opacity-60 mt-1 text-right">{format_time(&message.timestamp)}</div>
            </div>
        </div>
    }
}
