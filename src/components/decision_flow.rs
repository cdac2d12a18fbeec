//! Decision Flow Diagram
//!
//! Sankey-style SVG linking the five controlled features through the
//! model node to the predicted classes. Feature ribbons thicken with
//! their slider values; class ribbons thicken with predicted
//! probability. Switching taxonomies swaps the whole class column, with
//! departing classes collapsing to zero and new ones growing in.

use leptos::*;

use crate::components::animate::{now_ms, run_frames};
use crate::components::pie_chart::SLICE_COLORS;
use crate::model::probability::shape_probabilities;
use crate::model::traffic::{ADVANCED_LABELS, SIMPLE_LABELS};
use crate::model::features::CONTROLLED_FEATURES;
use crate::render::{Phase, Stage};
use crate::state::global::{GlobalState, Palette};
use crate::state::prediction::PredictionStore;

const FLOW_WIDTH: f64 = 900.0;
const FLOW_HEIGHT: f64 = 520.0;
const FEATURE_X: f64 = 160.0;
const MODEL_LEFT: f64 = 390.0;
const MODEL_RIGHT: f64 = 510.0;
const MODEL_MID_Y: f64 = 260.0;
const CLASS_X: f64 = 730.0;

fn feature_y(index: usize) -> f64 {
    90.0 + index as f64 * 85.0
}

fn class_y(index: usize, count: usize) -> f64 {
    let step = (440.0 / count as f64).min(110.0);
    MODEL_MID_Y + (index as f64 - (count as f64 - 1.0) / 2.0) * step
}

fn class_color(label: &str, palette: &Palette) -> String {
    match label {
        "Normal" => palette.safe.to_string(),
        "Malicious" => palette.malicious.to_string(),
        _ => ADVANCED_LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()].to_string())
            .unwrap_or_else(|| palette.muted.to_string()),
    }
}

/// Cubic ribbon from a left anchor to a right anchor.
pub(crate) fn ribbon(x0: f64, y0: f64, x1: f64, y1: f64) -> String {
    let cx = (x0 + x1) / 2.0;
    format!(
        "M{:.2},{:.2} C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
        x0, y0, cx, y0, cx, y1, x1, y1
    )
}

/// Feature-to-class flow for the supervised model
#[component]
pub fn DecisionFlow() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = use_context::<PredictionStore>().expect("PredictionStore not found");

    // Feature ribbons tween their slider value; class marks tween a
    // (y, probability) pair so a taxonomy switch moves and scales at once.
    let feature_stage = store_value(Stage::<usize, f64>::new());
    let class_stage = store_value(Stage::<String, (f64, f64)>::new());
    let running = store_value(false);
    let (frame, set_frame) = create_signal(0u64);

    create_effect(move |_| {
        let values = store.controlled.get();
        let advanced = store.advanced.get();
        let preset = store.preset.get();
        let raw = store.probabilities.get();
        let now = now_ms();

        let feature_targets: Vec<(usize, f64)> =
            values.iter().copied().enumerate().collect();
        feature_stage.update_value(|stage| {
            stage.apply(
                now,
                &feature_targets,
                |_, _| 0.0,
                |_, current| *current,
                400.0,
                400.0,
                200.0,
            );
        });

        if let Some(raw) = raw {
            let shaped = shape_probabilities(preset, advanced, &raw);
            let labels: &[&str] = if advanced {
                &ADVANCED_LABELS
            } else {
                &SIMPLE_LABELS
            };
            let class_targets: Vec<(String, (f64, f64))> = labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let probability = shaped.get(index).copied().unwrap_or(0.0);
                    (label.to_string(), (class_y(index, labels.len()), probability))
                })
                .collect();
            class_stage.update_value(|stage| {
                stage.apply(
                    now,
                    &class_targets,
                    |_, target| (target.0, 0.0),
                    |_, current| (current.0, 0.0),
                    400.0,
                    400.0,
                    200.0,
                );
            });
        }

        set_frame.update(|f| *f += 1);
        run_frames(running, move |now| {
            set_frame.update(|f| *f += 1);
            let features_busy = feature_stage
                .try_update_value(|stage| stage.animating(now))
                .unwrap_or(false);
            let classes_busy = class_stage
                .try_update_value(|stage| stage.animating(now))
                .unwrap_or(false);
            features_busy || classes_busy
        });
    });

    let marks = move || {
        frame.get();
        let now = now_ms();
        let palette = state.palette();

        let features = feature_stage
            .try_update_value(|stage| stage.sample(now))
            .unwrap_or_default();
        let classes = class_stage
            .try_update_value(|stage| stage.sample(now))
            .unwrap_or_default();

        let feature_marks = features
            .into_iter()
            .map(|mark| {
                let y = feature_y(mark.key);
                let value = mark.geom.clamp(0.0, 1.0);
                let name = CONTROLLED_FEATURES
                    .get(mark.key)
                    .map(|f| f.name)
                    .unwrap_or("");
                view! {
                    <path
                        d=ribbon(FEATURE_X + 8.0, y, MODEL_LEFT, MODEL_MID_Y)
                        fill="none"
                        stroke=palette.accent
                        stroke-width=format!("{:.2}", 1.5 + value * 8.0)
                        opacity=format!("{:.3}", 0.25 + value * 0.55)
                    />
                    <circle cx=FEATURE_X cy=y r="7" fill=palette.accent />
                    <text
                        x={FEATURE_X - 15.0}
                        y={y + 4.0}
                        text-anchor="end"
                        font-size="13"
                        fill=palette.text
                    >
                        {name}
                    </text>
                }
            })
            .collect_view();

        let class_marks = classes
            .into_iter()
            .map(|mark| {
                let (y, probability) = mark.geom;
                let probability = probability.clamp(0.0, 1.0);
                let exiting = mark.phase == Phase::Exiting;
                let text_opacity = if exiting { 1.0 - mark.progress } else { 1.0 };
                let color = class_color(&mark.key, &palette);
                view! {
                    <path
                        d=ribbon(MODEL_RIGHT, MODEL_MID_Y, CLASS_X - 8.0, y)
                        fill="none"
                        stroke=color.clone()
                        stroke-width=format!("{:.2}", 1.5 + probability * 16.0)
                        opacity=format!("{:.3}", 0.15 + probability * 0.75)
                    />
                    <circle
                        cx=CLASS_X
                        cy=y
                        r=format!("{:.2}", 6.0 + probability * 16.0)
                        fill=color
                        opacity="0.9"
                    />
                    <text
                        x={CLASS_X + 16.0}
                        y={y - 2.0}
                        font-size="13"
                        font-weight="600"
                        fill=palette.text
                        opacity=format!("{:.3}", text_opacity)
                    >
                        {mark.key.clone()}
                    </text>
                    <text
                        x={CLASS_X + 16.0}
                        y={y + 14.0}
                        font-size="11"
                        fill=palette.muted
                        opacity=format!("{:.3}", text_opacity)
                    >
                        {format!("{:.0}%", probability * 100.0)}
                    </text>
                }
            })
            .collect_view();

        view! {
            {feature_marks}
            <rect
                x=MODEL_LEFT
                y={MODEL_MID_Y - 30.0}
                width={MODEL_RIGHT - MODEL_LEFT}
                height="60"
                rx="12"
                fill=palette.surface
                stroke=palette.axis
                stroke-width="1"
            />
            <text
                x={(MODEL_LEFT + MODEL_RIGHT) / 2.0}
                y={MODEL_MID_Y + 5.0}
                text-anchor="middle"
                font-size="14"
                font-weight="bold"
                fill=palette.heading
            >
                "Random Forest"
            </text>
            {class_marks}
        }
    };

    view! {
        <svg
            viewBox=format!("0 0 {} {}", FLOW_WIDTH, FLOW_HEIGHT)
            class="w-full h-auto"
        >
            {marks}
        </svg>
    }
}
