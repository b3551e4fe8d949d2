//! Loading Component
//!
//! Loading spinner.

use leptos::*;

/// Spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3 text-gray-500">
            <div class="w-8 h-8 rounded-full border-4 border-gray-200 border-t-indigo-600 animate-spin" />
            {label.map(|text| view! { <p class="text-sm">{text}</p> })}
        </div>
    }
}
