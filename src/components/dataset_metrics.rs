//! Dataset Comparison Card
//!
//! CSV upload against the reference dataset. Statistics count up from
//! zero on every successful upload; a failed upload raises the error
//! line and leaves the previous summary alone.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::animate::{now_ms, run_frames};
use crate::state::comparison::ComparisonStore;
use crate::state::global::GlobalState;

const COUNT_UP_MS: f64 = 800.0;

/// Upload card with animated summary statistics
#[component]
pub fn DatasetMetrics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = ComparisonStore::new();

    let handle_file_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                store.begin(file.name());

                spawn_local(async move {
                    match api::compare_dataset(file).await {
                        Ok(result) => {
                            store.succeed(result);
                            state.show_success("Dataset compared successfully");
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Dataset comparison failed: {}", e).into(),
                            );
                            store.fail(
                                "Failed to process dataset. Please check your file format."
                                    .to_string(),
                            );
                            state.show_error(&format!("Dataset comparison failed: {}", e));
                        }
                    }
                });
            }
        }
    };

    let summary = move || {
        if store.busy.get() || store.file_name.get().is_none() {
            return None;
        }
        let file_name = store.file_name.get().unwrap_or_default();
        store.result.get().map(|result| {
            view! {
                <p
                    class="mb-6 text-sm italic"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    "Uploaded file: " <strong>{file_name}</strong>
                </p>
                <div class="flex flex-wrap justify-center gap-8">
                    <AnimatedStat value=result.features_uploaded label="Features" />
                    <AnimatedStat value=result.records_uploaded label="Records" />
                    <AnimatedStat value=result.matching_features label="Matching Features" />
                </div>
                <UsabilityGauge score=result.usability_score() />
                <p
                    class="mt-6 text-sm max-w-lg mx-auto"
                    style=move || format!("color: {};", state.palette().muted)
                >
                    {format!(
                        "{} of {} features matched the ",
                        result.matching_features, result.features_uploaded
                    )}
                    <strong>"TII-SSRC-23"</strong>
                    " dataset."
                </p>
            }
        })
    };

    view! {
        <div class="text-center px-4 py-6">
            <label class="upload-gradient inline-block px-5 py-2.5 rounded-md text-white
                          font-medium cursor-pointer shadow-md mb-4">
                "Upload CSV"
                <input
                    type="file"
                    accept=".csv"
                    class="hidden"
                    on:change=handle_file_upload
                    disabled=move || store.busy.get()
                />
            </label>

            {move || store.busy.get().then(|| view! {
                <p class="mt-2 mb-4" style=move || format!("color: {};", state.palette().muted)>
                    "Processing dataset..."
                </p>
            })}

            {move || store.error.get().map(|message| view! {
                <p class="mt-2 mb-4 text-red-500">{message}</p>
            })}

            {summary}
        </div>
    }
}

/// Thousands-separated rendering for the stat counters.
fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
fn AnimatedStat(value: usize, label: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (shown, set_shown) = create_signal(0usize);
    let running = store_value(false);

    create_effect(move |_| {
        if value == 0 {
            set_shown.set(0);
            return;
        }
        let start = now_ms();
        run_frames(running, move |now| {
            let t = ((now - start) / COUNT_UP_MS).clamp(0.0, 1.0);
            set_shown.set((value as f64 * t).round() as usize);
            t < 1.0
        });
    });

    view! {
        <div class="text-center px-4">
            <div class="text-3xl font-semibold stat-gradient">
                {move || format_count(shown.get())}
            </div>
            <div class="mt-1" style=move || format!("color: {};", state.palette().text)>
                {label}
            </div>
        </div>
    }
}

#[component]
fn UsabilityGauge(score: f64) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let color = if score > 80.0 {
        "#4caf50"
    } else if score > 60.0 {
        "#ffb300"
    } else {
        "#f44336"
    };
    let radius = 19.5;
    let circumference = std::f64::consts::TAU * radius;
    let offset = circumference * (1.0 - score / 100.0);

    view! {
        <div class="text-center mt-8">
            <div class="relative inline-flex">
                <svg width="130" height="130" viewBox="0 0 44 44" class="-rotate-90">
                    <circle
                        cx="22"
                        cy="22"
                        r=radius
                        fill="none"
                        stroke=color
                        stroke-width="5"
                        stroke-dasharray=format!("{:.3}", circumference)
                        stroke-dashoffset=format!("{:.3}", offset)
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span
                        class="text-xl font-medium"
                        style=move || format!("color: {};", state.palette().text)
                    >
                        {format!("{:.0}%", score)}
                    </span>
                </div>
            </div>
            <p class="text-sm mt-2" style=move || format!("color: {};", state.palette().muted)>
                "Dataset Usability Score"
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
