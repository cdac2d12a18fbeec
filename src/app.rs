//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::components::{Nav, Toast};
use crate::pages::{Architecture, Home, Supervised, Unsupervised};
use crate::state::global::{provide_global_state, GlobalState};

/// Milliseconds between API health probes.
const HEALTH_INTERVAL_MS: u32 = 30_000;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Keep the footer health dot current
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let probe = move || {
        spawn_local(async move {
            let healthy = api::check_health().await.is_ok();
            state.api_online.set(Some(healthy));
        });
    };
    probe();
    let health = gloo_timers::callback::Interval::new(HEALTH_INTERVAL_MS, probe);
    on_cleanup(move || drop(health));

    view! {
        <Router>
            <div
                class="min-h-screen flex flex-col transition-colors duration-300"
                style=move || {
                    let palette = state.palette();
                    format!(
                        "background-color: {}; color: {};",
                        palette.background, palette.text
                    )
                }
            >
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/supervised" view=Supervised />
                        <Route path="/unsupervised" view=Unsupervised />
                        <Route path="/architecture" view=Architecture />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with API status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing API status and the last prediction time
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer
            class="fixed bottom-0 left-0 right-0 py-3 px-4"
            style=move || format!("background-color: {};", state.palette().panel)
        >
            <div class="container mx-auto flex items-center justify-between text-sm">
                // API health
                <div class="flex items-center space-x-2">
                    {move || {
                        match state.api_online.get() {
                            Some(true) => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"API Online"</span>
                                </span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"API Offline"</span>
                                </span>
                            }.into_view(),
                            None => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Checking API..."</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Last prediction time
                <div style=move || format!("color: {};", state.palette().muted)>
                    {move || {
                        state.last_prediction.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| {
                                let local = dt.with_timezone(&chrono::Local);
                                format!("Last prediction: {}", local.format("%H:%M:%S"))
                            })
                            .unwrap_or_else(|| "No predictions yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <InlineLoading />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p
                class="mb-6"
                style=move || format!("color: {};", state.palette().muted)
            >
                "The page you're looking for doesn't exist."
            </p>
            <A href="/" class="inline-block">
                <span
                    class="inline-block px-6 py-3 rounded-lg font-medium transition-colors"
                    style=move || {
                        let palette = state.palette();
                        format!(
                            "background-color: {}; color: {};",
                            palette.accent, palette.accent_text
                        )
                    }
                >
                    "Back to Home"
                </span>
            </A>
        </div>
    }
}
