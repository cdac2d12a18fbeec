//! Supervised Page
//!
//! Random forest decision flow. Slider, preset, and taxonomy changes
//! re-run the prediction behind a short quiet period.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::components::loading::LoadingOverlay;
use crate::components::{DecisionFlow, FeaturePanel, PieChart, ScrollProgressBar};
use crate::model::probability::RAW_FALLBACK;
use crate::state::global::GlobalState;
use crate::state::prediction::PredictionStore;

/// Quiet period between the last input change and the predict call.
const DEBOUNCE_MS: u32 = 300;

/// Supervised page component
#[component]
pub fn Supervised() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let store = PredictionStore::new();
    provide_context(store);

    // Loading flips on as soon as an input changes; the request itself
    // waits out the quiet period, and a newer change cancels it.
    let pending: Rc<RefCell<Option<gloo_timers::callback::Timeout>>> =
        Rc::new(RefCell::new(None));

    let pending_for_effect = Rc::clone(&pending);
    create_effect(move |_| {
        let instances = vec![store.feature_vector()];
        let _ = (store.preset.get(), store.advanced.get());

        let stamp = store.begin_request();
        let timeout = gloo_timers::callback::Timeout::new(DEBOUNCE_MS, move || {
            spawn_local(async move {
                match api::predict("random_forest", &instances).await {
                    Ok(rows) => {
                        let raw = rows
                            .first()
                            .cloned()
                            .unwrap_or_else(|| RAW_FALLBACK.to_vec());
                        if store.finish_request(stamp, Some(raw)) {
                            state.mark_prediction();
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Prediction failed: {}", e).into(),
                        );
                        store.finish_request(stamp, None);
                    }
                }
            });
        });

        if let Some(previous) = pending_for_effect.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    });

    let pending_for_cleanup = Rc::clone(&pending);
    on_cleanup(move || {
        if let Some(timeout) = pending_for_cleanup.borrow_mut().take() {
            timeout.cancel();
        }
    });

    // Mount the flow once the first vector lands; later responses update
    // it in place through the store.
    let has_prediction = create_memo(move |_| store.probabilities.get().is_some());

    view! {
        <div class="space-y-8">
            // Page header
            <div class="text-center">
                <h1
                    class="text-3xl font-bold"
                    style=move || format!("color: {};", state.palette().heading)
                >
                    "Random Forest Decision Flow"
                </h1>
                <p
                    class="mt-2"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    "Adjust the top 5 influential features or load a preset to see real-time predictions."
                </p>
            </div>

            // Decision flow, dimmed while a request is in flight
            <section class="text-center">
                <LoadingOverlay loading=store.loading>
                    <div
                        class="inline-block rounded-2xl p-4 shadow-lg max-w-full"
                        style=move || {
                            format!(
                                "background-color: {}; min-height: 500px;",
                                state.palette().surface
                            )
                        }
                    >
                        {move || has_prediction.get().then(|| view! { <DecisionFlow /> })}
                    </div>
                </LoadingOverlay>
            </section>

            <FeaturePanel />

            <ScrollProgressBar />

            // Probability share for the same prediction
            <section class="text-center">
                <div
                    class="inline-block rounded-2xl p-4 shadow-lg max-w-full"
                    style=move || format!("background-color: {};", state.palette().surface)
                >
                    <PieChart />
                </div>
            </section>
        </div>
    }
}
