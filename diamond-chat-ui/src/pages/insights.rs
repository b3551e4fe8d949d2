//! Insights Page
//!
//! Knowledge base statistics and backend logs, refreshed on a timer.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;

use crate::api::{self, InsightStats};
use crate::components::Loading;
use crate::format::{format_stat_key, format_stat_value};

/// Refresh period for the dashboard
const POLL_INTERVAL_MS: u32 = 5000;

/// Insights page component
#[component]
pub fn Insights() -> impl IntoView {
    let stats = create_rw_signal(None::<InsightStats>);
    let logs = create_rw_signal(Vec::<String>::new());
    let loading = create_rw_signal(true);

    // Ticks are independent; a slow response may overlap the next one.
    // Failures only reach the console and the last good data stays up.
    let refresh = move || {
        spawn_local(async move {
            let fetched = (
                api::fetch_insight_stats().await,
                api::fetch_insight_logs(None).await,
            );

            match fetched {
                (Ok(new_stats), Ok(new_logs)) => {
                    let _ = stats.try_set(Some(new_stats));
                    let _ = logs.try_set(new_logs);
                }
                (Err(e), _) | (_, Err(e)) => {
                    web_sys::console::error_1(&format!("Error fetching insight data: {}", e).into());
                }
            }

            let _ = loading.try_set(false);
        });
    };

    refresh();
    let interval = Interval::new(POLL_INTERVAL_MS, refresh);
    on_cleanup(move || drop(interval));

    view! {
        <div class="flex flex-col min-h-screen max-w-2xl mx-auto shadow-xl bg-white">
            <header class="flex items-center bg-indigo-600 text-white px-4 py-3">
                <h1 class="text-lg font-semibold">"System Insights"</h1>
                <A href="/" class="ml-5 text-sm hover:underline">"Back to Chat"</A>
            </header>

            <div class="flex flex-col gap-5 p-5">
                {move || {
                    if loading.get() {
                        view! { <Loading label="Loading insights..." /> }.into_view()
                    } else {
                        view! {
                            <StatsCard stats=stats />
                            <LogsCard logs=logs />
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn StatsCard(stats: RwSignal<Option<InsightStats>>) -> impl IntoView {
    view! {
        <section class="bg-gray-100 rounded-lg p-4 shadow">
            <h2 class="text-lg font-semibold border-b border-gray-300 pb-2 mb-2">
                "Knowledge Base Stats"
            </h2>
            {move || match stats.get() {
                Some(stats) => view! {
                    <ul>
                        {stats.into_iter().map(|(key, value)| view! {
                            <li class="py-1">
                                <strong>{format_stat_key(&key)}":"</strong>
                                " "
                                {format_stat_value(&value)}
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view(),
                None => view! { <p>"No stats available"</p> }.into_view(),
            }}
        </section>
    }
}

#[component]
fn LogsCard(logs: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <section class="bg-gray-900 text-green-400 rounded-lg p-4 font-mono h-96 overflow-y-auto">
            <h2 class="text-lg font-semibold text-white border-b border-gray-700 pb-2 mb-2">
                "System Logs"
            </h2>
            <div>
                {move || logs.get().into_iter().map(|line| view! {
                    <div class="whitespace-pre-wrap mb-1">{line}</div>
                }).collect_view()}
            </div>
        </section>
    }
}
