//! Probability Pie Chart
//!
//! Donut chart of predicted traffic shares under three canned scenarios.
//! Slices are keyed by label: new slices sweep open from their end angle,
//! removed slices fade their labels out while the ring reflows.

use std::collections::HashMap;
use std::f64::consts::PI;

use leptos::*;

use crate::components::animate::{now_ms, run_frames};
use crate::render::arc::{centroid, donut_path, pie_layout, SliceAngles};
use crate::render::{Phase, Stage};
use crate::state::global::GlobalState;

const PIE_RADIUS: f64 = 140.0;
const PAD_ANGLE: f64 = 0.08;
/// Shares at or below this never get a slice.
const VISIBLE_SHARE: f64 = 0.01;

pub const PREDICTION_LABELS: [&str; 4] = ["Normal", "Bruteforce", "DoS", "Mirai"];
pub const SLICE_COLORS: [&str; 4] = ["#39594D", "#FF7556", "#D18EE2", "#F0C966"];

/// Scenario presets cycled by the buttons under the chart, with one
/// share per entry of [`PREDICTION_LABELS`].
const SCENARIOS: [(&str, [f64; 4]); 3] = [
    ("Normal Business Day", [0.9, 0.04, 0.05, 0.01]),
    ("Stealth Intrusion", [0.6, 0.3, 0.05, 0.05]),
    ("DDoS Flood", [0.05, 0.1, 0.8, 0.05]),
];

/// Color assigned to a prediction label.
pub fn slice_color(label: &str) -> &'static str {
    PREDICTION_LABELS
        .iter()
        .position(|candidate| *candidate == label)
        .map(|i| SLICE_COLORS[i])
        .unwrap_or("#888888")
}

/// Animated scenario donut
#[component]
pub fn PieChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (scenario, set_scenario) = create_signal(0usize);
    let stage = store_value(Stage::<String, SliceAngles>::new());
    // Last share shown per label. Fading labels keep their old number.
    let shown_values = store_value(HashMap::<String, f64>::new());
    let running = store_value(false);
    let (frame, set_frame) = create_signal(0u64);

    create_effect(move |_| {
        let values = SCENARIOS[scenario.get()].1;
        let visible: Vec<(String, f64)> = PREDICTION_LABELS
            .iter()
            .zip(values.iter())
            .filter(|(_, v)| **v > VISIBLE_SHARE)
            .map(|(label, v)| (label.to_string(), *v))
            .collect();

        let shares: Vec<f64> = visible.iter().map(|(_, v)| *v).collect();
        let targets: Vec<(String, SliceAngles)> = visible
            .iter()
            .map(|(label, _)| label.clone())
            .zip(pie_layout(&shares))
            .collect();

        shown_values.update_value(|shown| {
            for (label, value) in &visible {
                shown.insert(label.clone(), *value);
            }
        });

        let now = now_ms();
        stage.update_value(|stage| {
            stage.apply(
                now,
                &targets,
                |_, target| target.collapsed_at_end(),
                |_, current| current.collapsed_at_end(),
                750.0,
                750.0,
                350.0,
            );
        });
        set_frame.update(|f| *f += 1);
        run_frames(running, move |now| {
            set_frame.update(|f| *f += 1);
            stage
                .try_update_value(|stage| stage.animating(now))
                .unwrap_or(false)
        });
    });

    let slices = move || {
        frame.get();
        let now = now_ms();
        let sampled = stage
            .try_update_value(|stage| stage.sample(now))
            .unwrap_or_default();
        let values = shown_values.try_get_value().unwrap_or_default();
        let dark = state.theme.get().is_dark();
        let palette = state.palette();

        sampled
            .into_iter()
            .map(|slice| {
                let color = slice_color(&slice.key);
                let exiting = slice.phase == Phase::Exiting;
                let opacity = if exiting { 1.0 - slice.progress } else { 1.0 };

                // The ring drops removed slices outright; only their
                // labels linger and fade.
                let path = (!exiting).then(|| {
                    view! {
                        <path
                            d=donut_path(slice.geom, PIE_RADIUS * 0.75, PIE_RADIUS, PAD_ANGLE)
                            fill=color
                        />
                    }
                });

                // Labels snap to the target layout; fading ones hold the
                // layout they had when removed.
                let anchor = if exiting { slice.origin } else { slice.target };
                let (vx, vy) = centroid(anchor, PIE_RADIUS * 0.75, PIE_RADIUS);
                let (bx, by) = centroid(anchor, PIE_RADIUS * 1.1, PIE_RADIUS * 1.1);
                let side = if anchor.mid() < PI { 1.0 } else { -1.0 };
                let elbow_x = PIE_RADIUS * 1.2 * side;
                let label_x = PIE_RADIUS * 1.25 * side;
                let text_anchor = if side > 0.0 { "start" } else { "end" };
                let share = values.get(&slice.key).copied().unwrap_or(0.0);
                let value_fill = if dark { "#222" } else { "#fff" };
                let line_stroke = if dark { "#aaa" } else { "#555" };

                view! {
                    {path}
                    <text
                        transform=format!("translate({:.2}, {:.2})", vx, vy)
                        text-anchor="middle"
                        font-size="16"
                        font-weight="bold"
                        fill=value_fill
                        opacity=opacity
                    >
                        {format!("{:.0}%", share * 100.0)}
                    </text>
                    <polyline
                        points=format!(
                            "{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                            vx, vy, bx, by, elbow_x, by
                        )
                        fill="none"
                        stroke=line_stroke
                        stroke-width="1"
                        opacity=opacity
                    />
                    <text
                        transform=format!("translate({:.2}, {:.2})", label_x, by)
                        text-anchor=text_anchor
                        font-size="14"
                        fill=palette.text
                        opacity=opacity
                    >
                        {slice.key.clone()}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <div class="text-center mt-4">
            <h3
                class="text-lg font-bold mb-1"
                style=move || format!("color: {};", state.palette().heading)
            >
                "Predicted Traffic Probabilities"
            </h3>
            <p
                class="text-base mb-1"
                style=move || format!("color: {};", state.palette().muted)
            >
                "A breakdown of predicted network traffic types based on different scenarios."
            </p>

            <svg width="500" height="400" viewBox="0 0 500 400" class="mx-auto max-w-full h-auto">
                <g transform="translate(250, 200)">{slices}</g>
            </svg>

            <div class="flex flex-row flex-wrap gap-3 justify-center mt-2">
                {(0..SCENARIOS.len())
                    .map(|index| {
                        let name = SCENARIOS[index].0;
                        view! {
                            <button
                                class="px-4 py-2 rounded-lg text-sm font-medium border transition-colors"
                                style=move || {
                                    let palette = state.palette();
                                    if scenario.get() == index {
                                        format!(
                                            "background-color: {}; color: {}; border-color: {};",
                                            palette.accent, palette.accent_text, palette.accent
                                        )
                                    } else {
                                        format!(
                                            "background-color: transparent; color: {}; border-color: {};",
                                            palette.accent, palette.accent
                                        )
                                    }
                                }
                                on:click=move |_| set_scenario.set(index)
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
