//! Feature Vector Construction
//!
//! The classifier expects a fixed-width input. Five entries are exposed as
//! sliders; every other entry stays at a neutral midpoint.

/// Number of inputs the classifier expects.
pub const MODEL_FEATURE_COUNT: usize = 15;

/// Value assigned to every feature the UI does not control.
pub const NEUTRAL_FEATURE_VALUE: f64 = 0.5;

/// A slider-controlled feature and its position in the model input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlledFeature {
    pub name: &'static str,
    pub index: usize,
}

/// The five highest-importance features, in display order.
pub const CONTROLLED_FEATURES: [ControlledFeature; 5] = [
    ControlledFeature { name: "Flow Duration", index: 0 },
    ControlledFeature { name: "Fwd Packet Length Max", index: 1 },
    ControlledFeature { name: "FWD Init Win Bytes", index: 2 },
    ControlledFeature { name: "Flow Bytes/s", index: 3 },
    ControlledFeature { name: "Flow IAT Mean", index: 4 },
];

/// Canned slider configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Normal,
    Malicious,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Normal, Preset::Malicious];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Normal => "Normal",
            Preset::Malicious => "Malicious",
        }
    }

    /// Slider values, aligned with [`CONTROLLED_FEATURES`].
    pub fn values(&self) -> [f64; 5] {
        match self {
            Preset::Normal => [0.2, 0.2, 0.2, 0.2, 0.2],
            Preset::Malicious => [1.0, 0.8, 1.0, 0.7, 0.8],
        }
    }
}

/// Expand slider values into the full model input vector.
pub fn build_feature_vector(controlled: &[f64; 5]) -> Vec<f64> {
    let mut full = vec![NEUTRAL_FEATURE_VALUE; MODEL_FEATURE_COUNT];
    for (feature, value) in CONTROLLED_FEATURES.iter().zip(controlled.iter()) {
        full[feature.index] = *value;
    }
    full
}

/// All-neutral input, used by the live DBSCAN probe.
pub fn neutral_feature_vector() -> Vec<f64> {
    vec![NEUTRAL_FEATURE_VALUE; MODEL_FEATURE_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_length_and_neutral_fill() {
        let full = build_feature_vector(&[0.1, 0.2, 0.3, 0.4, 0.6]);
        assert_eq!(full.len(), MODEL_FEATURE_COUNT);

        let controlled: Vec<usize> = CONTROLLED_FEATURES.iter().map(|f| f.index).collect();
        for (i, v) in full.iter().enumerate() {
            if !controlled.contains(&i) {
                assert_eq!(*v, NEUTRAL_FEATURE_VALUE, "entry {} should be neutral", i);
            }
        }
    }

    #[test]
    fn test_controlled_values_land_on_their_indices() {
        let full = build_feature_vector(&[0.11, 0.22, 0.33, 0.44, 0.55]);
        assert_eq!(full[0], 0.11);
        assert_eq!(full[1], 0.22);
        assert_eq!(full[2], 0.33);
        assert_eq!(full[3], 0.44);
        assert_eq!(full[4], 0.55);
    }

    #[test]
    fn test_preset_values() {
        assert_eq!(Preset::Normal.values(), [0.2, 0.2, 0.2, 0.2, 0.2]);
        assert_eq!(Preset::Malicious.values(), [1.0, 0.8, 1.0, 0.7, 0.8]);
    }

    #[test]
    fn test_neutral_vector() {
        let v = neutral_feature_vector();
        assert_eq!(v.len(), MODEL_FEATURE_COUNT);
        assert!(v.iter().all(|x| *x == NEUTRAL_FEATURE_VALUE));
    }
}
