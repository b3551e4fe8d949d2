//! Chat Header Component
//!
//! Assistant identity, backend status and the link to the insights page.

use leptos::*;
use leptos_router::*;

use crate::api;

/// Header bar for the chat page
#[component]
pub fn ChatHeader() -> impl IntoView {
    // Probe the backend once so the status dot reflects reality
    let online = create_local_resource(|| (), |_| async move { api::health_check().await.is_ok() });

    view! {
        <header class="flex items-center justify-between bg-indigo-600 text-white px-4 py-3">
            <div class="flex items-center space-x-3">
                <div class="w-10 h-10 rounded-full bg-indigo-400 flex items-center justify-center text-xl">
                    "💎"
                </div>
                <div>
                    <h2 class="text-lg font-semibold">"Diamond Assistant"</h2>
                    <p class="flex items-center space-x-1 text-sm text-indigo-100">
                        {move || match online.get() {
                            Some(false) => view! {
                                <span class="w-2 h-2 bg-red-400 rounded-full" />
                                <span>"Offline"</span>
                            }.into_view(),
                            _ => view! {
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>"Online"</span>
                            }.into_view(),
                        }}
                    </p>
                </div>
            </div>

            <A
                href="/insight"
                class="px-3 py-1 rounded bg-white/20 hover:bg-white/30 text-sm transition-colors"
            >
                "Insights"
            </A>
        </header>
    }
}
