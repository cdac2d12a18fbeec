//! Home Page
//!
//! Landing view with the model catalog pulled from the API.

use leptos::*;
use leptos_router::A;

use crate::api::{self, ModelInfo};
use crate::components::loading::CardSkeleton;
use crate::state::global::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (models, set_models) = create_signal(Vec::<ModelInfo>::new());
    let (loaded, set_loaded) = create_signal(false);

    // Fetch the model catalog on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_models().await {
                Ok(found) => {
                    set_models.set(found);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch models: {}", e).into());
                }
            }

            set_loaded.set(true);
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-10">
            // Hero
            <div class="text-center pt-6">
                <h1
                    class="text-4xl font-bold"
                    style=move || format!("color: {};", state.palette().heading)
                >
                    "TrafficLens"
                </h1>
                <p
                    class="mt-3 max-w-2xl mx-auto"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    "Machine learning predictions over network traffic. Each model \
                     below has its own dashboard with live charts driven by the \
                     inference API."
                </p>
            </div>

            // Model catalog
            <section>
                <h2 class="text-lg font-semibold mb-4">"Models"</h2>
                <div class="grid gap-4 md:grid-cols-3">
                    {move || {
                        if !loaded.get() {
                            (0..3).map(|_| view! { <CardSkeleton /> }).collect_view()
                        } else {
                            let found = models.get();
                            if found.is_empty() {
                                view! {
                                    <p
                                        class="md:col-span-3 text-sm text-center py-8"
                                        style=move || format!("color: {};", state.palette().muted)
                                    >
                                        "No models available. Check that the API is running."
                                    </p>
                                }.into_view()
                            } else {
                                found.into_iter()
                                    .map(|info| view! { <ModelCard info=info /> })
                                    .collect_view()
                            }
                        }
                    }}
                </div>
            </section>
        </div>
    }
}

/// One catalog entry linking to the page that exercises the model
#[component]
fn ModelCard(info: ModelInfo) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let supervised = info.kind == "supervised";
    let tag_style = move || {
        let palette = state.palette();
        let color = if supervised { palette.accent } else { palette.safe };
        format!("color: {}; border-color: {};", color, color)
    };

    view! {
        <A href=model_route(&info.name) class="block">
            <div
                class="rounded-xl p-5 shadow-md transition-transform hover:-translate-y-1"
                style=move || format!("background-color: {};", state.palette().surface)
            >
                <div class="flex items-center justify-between mb-3">
                    <h3 class="text-xl font-semibold">{model_display_name(&info.name)}</h3>
                    <span class="text-xs px-2 py-0.5 rounded-full border" style=tag_style>
                        {info.kind.clone()}
                    </span>
                </div>
                <p
                    class="text-sm"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    {model_description(&info.name)}
                </p>
            </div>
        </A>
    }
}

/// Page that demonstrates the given model
fn model_route(name: &str) -> &'static str {
    match name {
        "dbscan" => "/unsupervised",
        "mlp" => "/architecture",
        _ => "/supervised",
    }
}

/// Human-readable model name
fn model_display_name(name: &str) -> String {
    match name {
        "random_forest" => "Random Forest".to_string(),
        "mlp" => "MLP".to_string(),
        "dbscan" => "DBSCAN".to_string(),
        other => other.replace('_', " "),
    }
}

/// One-line pitch for the catalog card
fn model_description(name: &str) -> &'static str {
    match name {
        "random_forest" => {
            "Classifies flows from the top influential features, with presets \
             and sliders driving live re-prediction."
        }
        "mlp" => {
            "Deep classifier whose layer weights are explorable as an \
             interactive network diagram."
        }
        "dbscan" => {
            "Density clustering that scores a live traffic feed and compares \
             uploaded datasets against the reference corpus."
        }
        _ => "Prediction model served by the API.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_routes() {
        assert_eq!(model_route("random_forest"), "/supervised");
        assert_eq!(model_route("dbscan"), "/unsupervised");
        assert_eq!(model_route("mlp"), "/architecture");
        assert_eq!(model_route("gradient_boost"), "/supervised");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(model_display_name("random_forest"), "Random Forest");
        assert_eq!(model_display_name("mlp"), "MLP");
        assert_eq!(model_display_name("dbscan"), "DBSCAN");
        assert_eq!(model_display_name("extra_trees"), "extra trees");
    }
}
