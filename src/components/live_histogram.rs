//! Live Confidence Histogram
//!
//! Canvas bar chart over the sliding sample window. Bars are keyed by
//! sample id: new bars grow from the baseline, departing bars shrink
//! back into it, and surviving bars slide left as the time axis moves.
//! Pausing freezes drawing while the window keeps collecting.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, Local, Utc};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::animate::{now_ms, run_frames};
use crate::model::confidence::confidence_percent;
use crate::render::reconcile::Sampled;
use crate::render::scale::{LinearScale, TimeScale};
use crate::render::{Rect, Stage};
use crate::state::global::{GlobalState, Palette};
use crate::state::live::{LiveWindow, TrafficSample};

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 450.0;
const MARGIN_TOP: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 70.0;
const INNER_WIDTH: f64 = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const INNER_HEIGHT: f64 = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Axis ticks and baseline for one drawn frame.
#[derive(Clone)]
struct ChartLayout {
    x_ticks: Vec<(f64, String)>,
    y_ticks: Vec<(f64, String)>,
    baseline: f64,
}

#[derive(Clone)]
struct TooltipData {
    x: f64,
    y: f64,
    status: &'static str,
    kind: String,
    time: String,
    confidence: f64,
}

/// Live DBSCAN confidence chart
#[component]
pub fn LiveHistogram() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let live = use_context::<LiveWindow>().expect("LiveWindow not found");

    let canvas_ref = create_node_ref::<html::Canvas>();
    let stage = store_value(Stage::<u64, Rect>::new());
    // Sample behind each staged bar. Shrinking bars keep their entry
    // until the exit finishes.
    let details = store_value(HashMap::<u64, TrafficSample>::new());
    let layout = store_value(None::<ChartLayout>);
    let observed_max = store_value(1000.0_f64);
    let hit_rects = store_value(Vec::<(Rect, u64)>::new());
    let running = store_value(false);

    let (hovered, set_hovered) = create_signal(None::<u64>);
    let (tooltip, set_tooltip) = create_signal(None::<TooltipData>);

    let redraw = move |now: f64| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Some(chart) = layout.try_get_value().flatten() else {
            return;
        };
        let bars = stage
            .try_update_value(|stage| stage.sample(now))
            .unwrap_or_default();
        let live_keys: HashSet<u64> = bars.iter().map(|bar| bar.key).collect();
        details.try_update_value(|map| map.retain(|key, _| live_keys.contains(key)));

        let detail_map = details.try_get_value().unwrap_or_default();
        let palette = state.theme.get_untracked().palette();
        let rects = draw_chart(
            &canvas,
            &palette,
            &chart,
            &bars,
            &detail_map,
            hovered.get_untracked(),
        );
        hit_rects.set_value(rects);
    };

    create_effect(move |_| {
        let samples = live.samples.get();
        let paused = live.paused.get();
        state.theme.get();
        let _ = canvas_ref.get();
        if paused {
            return;
        }

        let now_utc = Utc::now();
        let (start, end) = if samples.len() >= 2 {
            let min = samples.iter().map(|s| s.time).min().unwrap_or(now_utc);
            let max = samples.iter().map(|s| s.time).max().unwrap_or(now_utc);
            (min, max)
        } else {
            (now_utc - Duration::seconds(20), now_utc)
        };
        let x = TimeScale::new((start, end), (0.0, INNER_WIDTH));

        let observed = samples.iter().map(|s| s.bytes).fold(0.0_f64, f64::max);
        let max_bytes = if observed > 0.0 { observed } else { 1000.0 };
        let y = LinearScale::new((0.0, max_bytes), (INNER_HEIGHT, 0.0)).nice(10);
        observed_max.set_value(max_bytes);

        let baseline = y.scale(0.0);
        let bar_width = INNER_WIDTH / (samples.len().max(20) as f64) * 0.7;
        let targets: Vec<(u64, Rect)> = samples
            .iter()
            .map(|sample| {
                let top = y.scale(sample.bytes);
                let rect = Rect {
                    x: (x.scale(sample.time) - bar_width / 2.0).max(2.0),
                    y: top,
                    w: bar_width,
                    h: (baseline - top).max(0.0),
                };
                (sample.id, rect)
            })
            .collect();

        details.update_value(|map| {
            for sample in &samples {
                map.insert(sample.id, sample.clone());
            }
        });

        let x_ticks = x
            .ticks(5)
            .into_iter()
            .map(|t| {
                let label = t.with_timezone(&Local).format("%H:%M:%S").to_string();
                (x.scale(t), label)
            })
            .collect();
        let y_ticks = y
            .ticks(4)
            .into_iter()
            .map(|v| (y.scale(v), format!("{}k", (v / 1000.0).round() as i64)))
            .collect();
        layout.set_value(Some(ChartLayout {
            x_ticks,
            y_ticks,
            baseline,
        }));

        let now = now_ms();
        stage.update_value(|stage| {
            stage.apply(
                now,
                &targets,
                |_, target| Rect { x: target.x, y: baseline, w: target.w, h: 0.0 },
                |_, current| Rect { x: current.x, y: baseline, w: current.w, h: 0.0 },
                300.0,
                300.0,
                200.0,
            );
        });

        redraw(now);
        run_frames(running, move |now| {
            redraw(now);
            stage
                .try_update_value(|stage| stage.animating(now))
                .unwrap_or(false)
        });
    });

    // Hover highlight needs a frame of its own when nothing animates.
    create_effect(move |_| {
        hovered.get();
        redraw(now_ms());
    });

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let bounds = canvas.get_bounding_client_rect();
        let scale_x = CHART_WIDTH / bounds.width().max(1.0);
        let scale_y = CHART_HEIGHT / bounds.height().max(1.0);
        let px = ev.offset_x() as f64 * scale_x - MARGIN_LEFT;
        let py = ev.offset_y() as f64 * scale_y - MARGIN_TOP;

        let hit = hit_rects
            .try_get_value()
            .unwrap_or_default()
            .iter()
            .rev()
            .find(|(r, _)| px >= r.x && px <= r.x + r.w && py >= r.y && py <= r.y + r.h)
            .map(|(_, key)| *key);

        if hit != hovered.get_untracked() {
            set_hovered.set(hit);
        }

        match hit.and_then(|key| {
            details
                .try_get_value()
                .and_then(|map| map.get(&key).cloned())
        }) {
            Some(sample) => {
                let confidence =
                    confidence_percent(sample.bytes, Some(observed_max.get_value()));
                set_tooltip.set(Some(TooltipData {
                    x: ev.offset_x() as f64 + 10.0,
                    y: ev.offset_y() as f64 - 10.0,
                    status: if sample.malicious { "Malicious" } else { "Safe" },
                    kind: sample.label.clone(),
                    time: sample.time.with_timezone(&Local).format("%H:%M:%S").to_string(),
                    confidence,
                }));
            }
            None => set_tooltip.set(None),
        }
    };

    let on_mouse_leave = move |_| {
        set_hovered.set(None);
        set_tooltip.set(None);
    };

    view! {
        <div class="flex flex-col items-center p-4">
            <div class="relative inline-block">
                <canvas
                    node_ref=canvas_ref
                    width="800"
                    height="450"
                    class="max-w-full h-auto rounded-xl cursor-crosshair"
                    on:mousemove=on_mouse_move
                    on:mouseleave=on_mouse_leave
                />
                {move || {
                    tooltip.get().map(|t| view! {
                        <div
                            class="absolute z-50 pointer-events-none rounded-md px-3 py-2 text-sm font-medium text-white"
                            style=format!(
                                "left: {:.0}px; top: {:.0}px; background: rgba(0,0,0,0.75); \
                                 box-shadow: 0 2px 8px rgba(0,0,0,0.4);",
                                t.x, t.y
                            )
                        >
                            <div class="font-semibold">{t.status}</div>
                            <div>"Type: " {t.kind}</div>
                            <div>"Time Sent: " {t.time}</div>
                            <div>{format!("Confidence: {:.2}%", t.confidence)}</div>
                        </div>
                    })
                }}
            </div>

            <div class="mt-4">
                <button
                    class="w-10 h-10 rounded-full border text-lg leading-none"
                    style=move || {
                        let dark = state.theme.get().is_dark();
                        if dark {
                            "background-color: #333; color: #FFD580; border-color: #555;"
                        } else {
                            "background-color: #FFF; color: #D95C39; border-color: #CCC;"
                        }
                    }
                    title=move || if live.paused.get() { "Play" } else { "Pause" }
                    on:click=move |_| live.toggle_paused()
                >
                    {move || if live.paused.get() { "▶" } else { "⏸" }}
                </button>
            </div>
        </div>
    }
}

/// Paint one frame of the histogram. Returns the bar rectangles that
/// were drawn, in chart coordinates, for mouse hit testing.
fn draw_chart(
    canvas: &HtmlCanvasElement,
    palette: &Palette,
    layout: &ChartLayout,
    bars: &[Sampled<u64, Rect>],
    details: &HashMap<u64, TrafficSample>,
    hovered: Option<u64>,
) -> Vec<(Rect, u64)> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Background
    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Title and subtitle
    ctx.set_text_align("center");
    ctx.set_fill_style(&palette.chart_title.into());
    ctx.set_font("700 22px sans-serif");
    let _ = ctx.fill_text("Unsupervised Traffic Confidence", width / 2.0, 35.0);

    ctx.set_fill_style(&palette.muted.into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(
        "DBSCAN Live model prediction confidence by traffic type",
        width / 2.0,
        55.0,
    );

    // Legend
    let legend_x = width / 2.0 - 70.0;
    ctx.set_fill_style(&palette.safe.into());
    ctx.fill_rect(legend_x, 65.0, 14.0, 14.0);
    ctx.set_fill_style(&palette.malicious.into());
    ctx.fill_rect(legend_x + 90.0, 65.0, 14.0, 14.0);
    ctx.set_text_align("left");
    ctx.set_fill_style(&palette.axis.into());
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text("Safe", legend_x + 20.0, 76.0);
    let _ = ctx.fill_text("Malicious", legend_x + 110.0, 76.0);

    // Grid lines
    ctx.set_stroke_style(&palette.grid.into());
    ctx.set_line_width(1.0);
    let dashes = js_sys::Array::of2(&JsValue::from_f64(2.0), &JsValue::from_f64(2.0));
    let _ = ctx.set_line_dash(&dashes);
    for (tick_y, _) in &layout.y_ticks {
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, MARGIN_TOP + tick_y);
        ctx.line_to(MARGIN_LEFT + INNER_WIDTH, MARGIN_TOP + tick_y);
        ctx.stroke();
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Axis labels
    ctx.set_fill_style(&palette.axis.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    for (tick_y, label) in &layout.y_ticks {
        let _ = ctx.fill_text(label, MARGIN_LEFT - 8.0, MARGIN_TOP + tick_y + 4.0);
    }
    ctx.set_text_align("center");
    for (tick_x, label) in &layout.x_ticks {
        let _ = ctx.fill_text(label, MARGIN_LEFT + tick_x, MARGIN_TOP + INNER_HEIGHT + 20.0);
    }

    // Axis lines
    ctx.set_stroke_style(&palette.axis.into());
    ctx.begin_path();
    ctx.move_to(MARGIN_LEFT, MARGIN_TOP);
    ctx.line_to(MARGIN_LEFT, MARGIN_TOP + layout.baseline);
    ctx.line_to(MARGIN_LEFT + INNER_WIDTH, MARGIN_TOP + layout.baseline);
    ctx.stroke();

    // Bars
    let mut hit: Vec<(Rect, u64)> = Vec::with_capacity(bars.len());
    for bar in bars {
        let rect = bar.geom;
        if rect.w <= 0.0 || rect.h <= 0.0 {
            continue;
        }
        let malicious = details
            .get(&bar.key)
            .map(|sample| sample.malicious)
            .unwrap_or(false);
        let color = if malicious { palette.malicious } else { palette.safe };
        ctx.set_global_alpha(if hovered == Some(bar.key) { 0.85 } else { 1.0 });
        ctx.set_fill_style(&color.into());
        ctx.fill_rect(MARGIN_LEFT + rect.x, MARGIN_TOP + rect.y, rect.w, rect.h);
        hit.push((rect, bar.key));
    }
    ctx.set_global_alpha(1.0);

    hit
}
