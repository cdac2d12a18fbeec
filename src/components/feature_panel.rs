//! Feature Control Panel
//!
//! Sliders for the five controlled features plus preset buttons and the
//! taxonomy toggle. All values live in the shared [`PredictionStore`].

use leptos::*;

use crate::model::features::{ControlledFeature, Preset, CONTROLLED_FEATURES};
use crate::state::global::GlobalState;
use crate::state::prediction::PredictionStore;

/// Slider panel driving the supervised prediction
#[component]
pub fn FeaturePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            class="rounded-xl p-5 space-y-4"
            style=move || format!("background-color: {};", state.palette().panel)
        >
            <div class="flex flex-wrap items-center justify-between gap-3">
                <div class="flex gap-2">
                    {Preset::ALL
                        .iter()
                        .map(|preset| view! { <PresetButton preset=*preset /> })
                        .collect_view()}
                </div>
                <AdvancedToggle />
            </div>

            <div class="space-y-3">
                {CONTROLLED_FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| view! {
                        <FeatureSlider index=index feature=*feature />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PresetButton(preset: Preset) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = use_context::<PredictionStore>().expect("PredictionStore not found");

    let style = move || {
        let palette = state.palette();
        if store.preset.get() == Some(preset) {
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
    };

    view! {
        <button
            class="px-4 py-2 rounded-lg text-sm font-medium border transition-colors"
            style=style
            on:click=move |_| store.apply_preset(preset)
        >
            {preset.label()}
        </button>
    }
}

#[component]
fn AdvancedToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = use_context::<PredictionStore>().expect("PredictionStore not found");

    let style = move || {
        let palette = state.palette();
        if store.advanced.get() {
            format!(
                "background-color: {}; color: {};",
                palette.accent, palette.accent_text
            )
        } else {
            format!(
                "background-color: {}; color: {};",
                palette.surface, palette.text
            )
        }
    };

    view! {
        <button
            class="w-10 h-10 rounded-full text-lg transition-colors"
            style=style
            title=move || {
                if store.advanced.get() {
                    "Back to Normal/Malicious view"
                } else {
                    "Advanced view (8 traffic types)"
                }
            }
            on:click=move |_| store.toggle_advanced()
        >
            "🔍"
        </button>
    }
}

#[component]
fn FeatureSlider(index: usize, feature: ControlledFeature) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = use_context::<PredictionStore>().expect("PredictionStore not found");

    let value = move || store.controlled.get()[index];

    view! {
        <div
            class="rounded-lg px-4 py-3"
            style=move || format!("background-color: {};", state.palette().surface)
        >
            <div class="flex items-center justify-between mb-2">
                <span class="text-sm font-medium">{feature.name}</span>
                <span
                    class="text-sm font-mono"
                    style=move || format!("color: {};", state.palette().chart_title)
                >
                    {move || format!("{:.2}", value())}
                </span>
            </div>
            <input
                type="range"
                min="0"
                max="1"
                step="0.01"
                class="w-full feature-slider"
                prop:value=move || value().to_string()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                        store.set_slider(index, parsed.clamp(0.0, 1.0));
                    }
                }
            />
        </div>
    }
}
