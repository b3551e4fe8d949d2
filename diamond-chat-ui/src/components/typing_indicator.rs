//! Typing Indicator Component

use leptos::*;

/// Three bouncing dots shown while the assistant is answering
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="bg-white rounded-2xl rounded-bl-none px-4 py-3 shadow flex space-x-1">
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" />
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:150ms]" />
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:300ms]" />
            </div>
        </div>
    }
}
