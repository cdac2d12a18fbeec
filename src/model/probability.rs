//! Probability Shaping
//!
//! The classifier answers in a four-class order: normal, bruteforce, dos,
//! mirai. The display taxonomy is either two classes (Normal/Malicious) or
//! the full eight types, so raw output gets reshaped before charting. The
//! Malicious preset pins a fixed demonstration vector regardless of what
//! the model returned.

use crate::model::features::Preset;

/// Fallback used when a response carries no probabilities.
pub const RAW_FALLBACK: [f64; 4] = [1.0, 0.0, 0.0, 0.0];

/// Reshape raw four-class output for the active taxonomy.
///
/// Output aligns positionally with [`crate::model::traffic::SIMPLE_LABELS`]
/// or [`crate::model::traffic::ADVANCED_LABELS`].
pub fn shape_probabilities(preset: Option<Preset>, advanced: bool, raw: &[f64]) -> Vec<f64> {
    if preset == Some(Preset::Malicious) {
        return if advanced {
            vec![0.01, 0.02, 0.15, 0.7, 0.01, 0.1, 0.01, 0.0]
        } else {
            vec![0.1, 0.9]
        };
    }

    let p_normal = raw.first().copied().unwrap_or(1.0);
    let p_bruteforce = raw.get(1).copied().unwrap_or(0.0);
    let p_dos = raw.get(2).copied().unwrap_or(0.0);
    let p_mirai = raw.get(3).copied().unwrap_or(0.0);

    if advanced {
        // spread the normal mass across the benign media types
        vec![
            p_normal * 0.1,  // audio
            p_normal * 0.5,  // background
            p_bruteforce,
            p_dos,
            0.0, // information gathering
            p_mirai,
            p_normal * 0.15, // text
            p_normal * 0.25, // video
        ]
    } else {
        vec![p_normal, p_bruteforce + p_dos + p_mirai]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_malicious_preset_pins_advanced_vector() {
        let shaped = shape_probabilities(Some(Preset::Malicious), true, &[0.99, 0.0, 0.01, 0.0]);
        assert_eq!(shaped, vec![0.01, 0.02, 0.15, 0.7, 0.01, 0.1, 0.01, 0.0]);
    }

    #[test]
    fn test_malicious_preset_pins_simple_pair() {
        let shaped = shape_probabilities(Some(Preset::Malicious), false, &[0.99, 0.0, 0.01, 0.0]);
        assert_eq!(shaped, vec![0.1, 0.9]);
    }

    #[test]
    fn test_simple_mode_collapses_attack_mass() {
        let shaped = shape_probabilities(Some(Preset::Normal), false, &[0.9, 0.04, 0.05, 0.01]);
        assert_close(&shaped, &[0.9, 0.10]);
    }

    #[test]
    fn test_advanced_mode_spreads_normal_mass() {
        let shaped = shape_probabilities(None, true, &[0.8, 0.04, 0.05, 0.01]);
        assert_close(
            &shaped,
            &[0.08, 0.4, 0.04, 0.05, 0.0, 0.01, 0.12, 0.2],
        );
    }

    #[test]
    fn test_no_preset_behaves_like_normal() {
        let with_none = shape_probabilities(None, false, &[0.7, 0.1, 0.1, 0.1]);
        let with_normal = shape_probabilities(Some(Preset::Normal), false, &[0.7, 0.1, 0.1, 0.1]);
        assert_eq!(with_none, with_normal);
    }

    #[test]
    fn test_fallback_vector_reads_as_all_normal() {
        let shaped = shape_probabilities(None, false, &RAW_FALLBACK);
        assert_close(&shaped, &[1.0, 0.0]);
    }
}
