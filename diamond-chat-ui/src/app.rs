//! App Root Component
//!
//! Routes between the chat page and the insights dashboard.

use leptos::*;
use leptos_router::*;

use crate::pages::{Chat, Insights};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes>
                    <Route path="/" view=Chat />
                    <Route path="/insight" view=Insights />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Chat"
            </A>
        </div>
    }
}
