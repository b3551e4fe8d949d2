//! Chat Page
//!
//! The conversation with the diamond assistant.

use leptos::*;

use crate::components::{ChatHeader, ErrorBanner, MessageInput, MessageList};
use crate::state::provide_chat_state;

/// Chat page component
///
/// Every mount starts a new session and fetches its greeting.
#[component]
pub fn Chat() -> impl IntoView {
    let state = provide_chat_state();
    state.load_greeting();

    view! {
        <div class="flex flex-col h-screen max-w-2xl mx-auto shadow-xl">
            <ChatHeader />
            <ErrorBanner />
            <MessageList />
            <MessageInput />
        </div>
    }
}
