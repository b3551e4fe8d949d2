//! Error Banner Component
//!
//! Dismissible banner above the message list.

use leptos::*;

use crate::state::ChatState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<ChatState>().expect("ChatState not found");

    move || {
        state.error.get().map(|message| {
            view! {
                <div class="flex items-center justify-between bg-red-100 text-red-800 px-4 py-2 text-sm">
                    <span>{message}</span>
                    <button
                        on:click=move |_| state.dismiss_error()
                        class="ml-4 font-bold hover:text-red-600"
                        aria-label="Dismiss"
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
