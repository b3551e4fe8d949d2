//! Message Input Component
//!
//! Text box and send button; disabled while the assistant is answering.

use leptos::*;

use crate::format::is_sendable;
use crate::state::ChatState;

#[component]
pub fn MessageInput() -> impl IntoView {
    let state = use_context::<ChatState>().expect("ChatState not found");
    let (draft, set_draft) = create_signal(String::new());

    let submit = move || {
        let text = draft.get_untracked();
        if !is_sendable(&text) || state.typing.get_untracked() {
            return;
        }
        set_draft.set(String::new());
        state.send(text);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <form on:submit=on_submit class="border-t border-gray-200 bg-white px-4 py-3">
            <div class="flex items-center space-x-2">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || state.typing.get()
                    class="flex-1 rounded-full border border-gray-300 px-4 py-2
                           focus:border-indigo-500 focus:outline-none disabled:bg-gray-100"
                />
                <button
                    type="submit"
                    disabled=move || !is_sendable(&draft.get()) || state.typing.get()
                    class="w-10 h-10 rounded-full bg-indigo-600 hover:bg-indigo-700
                           disabled:bg-gray-300 text-white flex items-center justify-center transition-colors"
                    aria-label="Send"
                >
                    "➤"
                </button>
            </div>
        </form>
    }
}
