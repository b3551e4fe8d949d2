//! Diamond Chat
//!
//! Browser frontend for the diamond store assistant, built with Leptos (WASM).
//!
//! The chat page holds one conversation per visit, keyed by a session id
//! generated on mount. The insights page polls the backend's knowledge base
//! statistics and recent logs.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
