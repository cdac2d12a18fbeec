//! Global Application State
//!
//! Theme, API health, and toast notifications shared by every page
//! through the Leptos context tree.

use gloo_timers::callback::Timeout;
use leptos::*;

const THEME_STORAGE_KEY: &str = "trafficlens_theme";

/// Active color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Resolved colors for this mode. Chart renderers take the whole
    /// palette rather than reading CSS variables back out of the DOM.
    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                background: "#1A1414",
                surface: "#222222",
                panel: "#1C1C1C",
                heading: "#EF9B7D",
                chart_title: "#F0C966",
                text: "#FFFFFF",
                muted: "#AAAAAA",
                axis: "#E0DCC7",
                grid: "#2A2A2A",
                accent: "#F0C966",
                accent_text: "#000000",
                safe: "#45A587",
                malicious: "#EF9B7D",
            },
            ThemeMode::Light => Palette {
                background: "#EAE6DE",
                surface: "#FFFFFF",
                panel: "#EFF0EB",
                heading: "#D95C39",
                chart_title: "#D95C39",
                text: "#000000",
                muted: "#555555",
                axis: "#444444",
                grid: "#E0E0E0",
                accent: "#000000",
                accent_text: "#FFFFFF",
                safe: "#2D8C6B",
                malicious: "#E2725B",
            },
        }
    }
}

/// Full set of theme colors handed to components and canvas code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub panel: &'static str,
    pub heading: &'static str,
    pub chart_title: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub safe: &'static str,
    pub malicious: &'static str,
}

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current color scheme
    pub theme: RwSignal<ThemeMode>,
    /// Result of the most recent health probe, None before the first one
    pub api_online: RwSignal<Option<bool>>,
    /// Unix millis of the last model response shown in the footer
    pub last_prediction: RwSignal<Option<i64>>,
    /// Global loading indicator
    pub loading: RwSignal<bool>,
    /// Global error message
    pub error: RwSignal<Option<String>>,
    /// Success notification message
    pub success: RwSignal<Option<String>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(ThemeMode::Dark),
            api_online: create_rw_signal(None),
            last_prediction: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Palette for the current theme, tracked reactively.
    pub fn palette(&self) -> Palette {
        self.theme.get().palette()
    }

    /// Flip the color scheme and persist the choice.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        store_theme(next);
    }

    /// Stamp the footer with the current time after a model response.
    pub fn mark_prediction(&self) {
        self.last_prediction
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

fn stored_theme() -> Option<ThemeMode> {
    let storage = web_sys::window()?.local_storage().ok()??;
    match storage.get_item(THEME_STORAGE_KEY).ok()??.as_str() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

fn store_theme(mode: ThemeMode) {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        let value = if mode.is_dark() { "dark" } else { "light" };
        let _ = storage.set_item(THEME_STORAGE_KEY, value);
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState::new();
    if let Some(saved) = stored_theme() {
        state.theme.set(saved);
    }
    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled_flips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_differ_per_mode() {
        let dark = ThemeMode::Dark.palette();
        let light = ThemeMode::Light.palette();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
        assert_eq!(dark.background, "#1A1414");
        assert_eq!(light.background, "#EAE6DE");
    }

    #[test]
    fn test_dark_palette_uses_light_text() {
        let dark = ThemeMode::Dark.palette();
        assert_eq!(dark.text, "#FFFFFF");
        assert_eq!(dark.accent_text, "#000000");
    }

    #[test]
    fn test_global_state_defaults() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert_eq!(state.api_online.get_untracked(), None);
        assert_eq!(state.last_prediction.get_untracked(), None);
        assert!(!state.loading.get_untracked());
        assert_eq!(state.error.get_untracked(), None);
        runtime.dispose();
    }
}
