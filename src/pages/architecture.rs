//! Architecture Page
//!
//! Fetches the MLP topology from the API and renders the layer diagram.

use leptos::*;

use crate::api::{self, ModelArchitecture};
use crate::components::loading::ChartSkeleton;
use crate::components::{LayerDiagram, ScrollProgressBar};
use crate::state::global::GlobalState;

/// Strongest edges kept per layer, by absolute weight.
const TOP_K_EDGES: usize = 5;

/// Architecture page component
#[component]
pub fn Architecture() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (architecture, set_architecture) = create_signal(None::<ModelArchitecture>);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(true);
    let (attempt, set_attempt) = create_signal(0u32);

    // Fetch on mount; bumping `attempt` retries after a failure.
    create_effect(move |_| {
        let _ = attempt.get();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_architecture("mlp", TOP_K_EDGES).await {
                Ok(found) => {
                    set_architecture.set(Some(found));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch model architecture: {}", e).into(),
                    );
                    set_error.set(Some(e));
                }
            }

            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="text-center">
                <h1
                    class="text-3xl font-bold"
                    style=move || format!("color: {};", state.palette().heading)
                >
                    "MLP Model Architecture"
                </h1>
                <p
                    class="mt-2"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    "An interactive visualisation of the MLP neural pathways for each network type classification."
                </p>
            </div>

            <section class="text-center">
                {move || {
                    if loading.get() {
                        view! { <ChartSkeleton /> }.into_view()
                    } else if let Some(message) = error.get() {
                        view! {
                            <div class="py-12 space-y-4">
                                <p class="text-red-500">{message}</p>
                                <button
                                    class="px-4 py-2 rounded-lg text-sm font-medium"
                                    style=move || {
                                        let palette = state.palette();
                                        format!(
                                            "background-color: {}; color: {};",
                                            palette.accent, palette.accent_text
                                        )
                                    }
                                    on:click=move |_| set_attempt.update(|n| *n += 1)
                                >
                                    "Retry"
                                </button>
                            </div>
                        }.into_view()
                    } else if let Some(found) = architecture.get() {
                        view! {
                            <div
                                class="rounded-2xl p-4 shadow-lg max-w-3xl mx-auto"
                                style=move || {
                                    format!("background-color: {};", state.palette().surface)
                                }
                            >
                                <LayerDiagram architecture=found />
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </section>

            <ScrollProgressBar />
        </div>
    }
}
