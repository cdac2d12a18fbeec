//! Prediction State
//!
//! Reactive store behind the supervised dashboard: slider values,
//! preset selection, and the latest shaped probability vector.
//! Responses are generation-stamped so a slow reply never overwrites
//! the result of a newer request.

use leptos::*;

use crate::model::features::{build_feature_vector, Preset};

/// State driving the decision-flow and pie charts.
#[derive(Clone, Copy)]
pub struct PredictionStore {
    /// Slider values for the five controlled features, each in [0, 1].
    pub controlled: RwSignal<[f64; 5]>,
    /// Active preset. Any manual slider move clears it.
    pub preset: RwSignal<Option<Preset>>,
    /// Eight-type taxonomy when set, two-class otherwise.
    pub advanced: RwSignal<bool>,
    /// Latest raw probability row, None until the first response lands.
    /// Shaping to the active taxonomy happens where it is read.
    pub probabilities: RwSignal<Option<Vec<f64>>>,
    /// Request in flight.
    pub loading: RwSignal<bool>,
    /// Monotonic stamp handed to each request.
    generation: RwSignal<u64>,
}

impl PredictionStore {
    pub fn new() -> Self {
        Self {
            controlled: create_rw_signal(Preset::Normal.values()),
            preset: create_rw_signal(Some(Preset::Normal)),
            advanced: create_rw_signal(false),
            probabilities: create_rw_signal(None),
            loading: create_rw_signal(false),
            generation: create_rw_signal(0),
        }
    }

    /// Move one slider. Leaves the other values alone and drops the
    /// preset marker since the values no longer match it.
    pub fn set_slider(&self, index: usize, value: f64) {
        self.controlled.update(|values| {
            if let Some(slot) = values.get_mut(index) {
                *slot = value;
            }
        });
        self.preset.set(None);
    }

    /// Load a preset into all five sliders and remember which one.
    pub fn apply_preset(&self, preset: Preset) {
        self.controlled.set(preset.values());
        self.preset.set(Some(preset));
    }

    pub fn toggle_advanced(&self) {
        self.advanced.update(|advanced| *advanced = !*advanced);
    }

    /// Full model input for the current sliders, tracked reactively.
    pub fn feature_vector(&self) -> Vec<f64> {
        build_feature_vector(&self.controlled.get())
    }

    /// Stamp a new request and flip the loading flag on.
    pub fn begin_request(&self) -> u64 {
        self.generation.update(|generation| *generation += 1);
        self.loading.set(true);
        self.generation.get_untracked()
    }

    /// Land a response if nothing newer was stamped since. Errors pass
    /// None to clear the loading flag without touching the last good
    /// probabilities. Returns whether the response was applied. The
    /// store may already be disposed when a late response arrives; that
    /// also counts as stale.
    pub fn finish_request(&self, stamp: u64, shaped: Option<Vec<f64>>) -> bool {
        let current = match self.generation.try_get_untracked() {
            Some(current) => current,
            None => return false,
        };
        if current != stamp {
            return false;
        }
        if let Some(probabilities) = shaped {
            self.probabilities.set(Some(probabilities));
        }
        self.loading.set(false);
        true
    }
}

impl Default for PredictionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_normal_preset() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        assert_eq!(store.preset.get_untracked(), Some(Preset::Normal));
        assert_eq!(store.controlled.get_untracked(), Preset::Normal.values());
        assert_eq!(store.probabilities.get_untracked(), None);
        assert!(!store.advanced.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_slider_move_clears_preset() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        store.set_slider(2, 0.9);
        assert_eq!(store.preset.get_untracked(), None);
        assert_eq!(store.controlled.get_untracked()[2], 0.9);
        assert_eq!(store.controlled.get_untracked()[0], 0.2);
        runtime.dispose();
    }

    #[test]
    fn test_apply_preset_replaces_all_sliders() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        store.set_slider(0, 0.42);
        store.apply_preset(Preset::Malicious);
        assert_eq!(store.preset.get_untracked(), Some(Preset::Malicious));
        assert_eq!(
            store.controlled.get_untracked(),
            Preset::Malicious.values()
        );
        runtime.dispose();
    }

    #[test]
    fn test_out_of_range_slider_is_ignored() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        store.set_slider(9, 0.5);
        assert_eq!(store.controlled.get_untracked(), Preset::Normal.values());
        runtime.dispose();
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        let first = store.begin_request();
        let second = store.begin_request();
        assert!(store.finish_request(second, Some(vec![0.3, 0.7])));
        assert!(!store.finish_request(first, Some(vec![0.9, 0.1])));
        assert_eq!(
            store.probabilities.get_untracked(),
            Some(vec![0.3, 0.7])
        );
        runtime.dispose();
    }

    #[test]
    fn test_response_after_dispose_is_dropped() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        let stamp = store.begin_request();
        runtime.dispose();
        assert!(!store.finish_request(stamp, Some(vec![0.5, 0.5])));
    }

    #[test]
    fn test_error_keeps_last_probabilities() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        let stamp = store.begin_request();
        assert!(store.finish_request(stamp, Some(vec![0.8, 0.2])));
        let stamp = store.begin_request();
        assert!(store.loading.get_untracked());
        assert!(store.finish_request(stamp, None));
        assert!(!store.loading.get_untracked());
        assert_eq!(store.probabilities.get_untracked(), Some(vec![0.8, 0.2]));
        runtime.dispose();
    }

    #[test]
    fn test_feature_vector_uses_current_sliders() {
        let runtime = create_runtime();
        let store = PredictionStore::new();
        store.set_slider(1, 0.75);
        let vector = store.feature_vector();
        assert_eq!(vector.len(), 15);
        assert_eq!(vector[1], 0.75);
        runtime.dispose();
    }
}
