//! Message List Component
//!
//! Read-only view of the thread that keeps the newest entry in view.

use leptos::*;

use crate::components::{MessageBubble, TypingIndicator};
use crate::state::ChatState;

#[component]
pub fn MessageList() -> impl IntoView {
    let state = use_context::<ChatState>().expect("ChatState not found");
    let end_ref = create_node_ref::<html::Div>();

    // Scroll to the bottom whenever the thread or the typing flag changes
    create_effect(move |_| {
        state.messages.with(|_| ());
        state.typing.get();
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    view! {
        <div class="flex-1 overflow-y-auto scroll-smooth bg-gray-100 px-4 py-4 space-y-3">
            // Messages are never removed or reordered, so the index is a stable key
            <For
                each=move || state.messages.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=|(_, message)| view! { <MessageBubble message=message /> }
            />

            <Show when=move || state.typing.get()>
                <TypingIndicator />
            </Show>

            <div node_ref=end_ref />
        </div>
    }
}
