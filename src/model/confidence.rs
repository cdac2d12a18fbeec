//! Display Confidence Curve
//!
//! Synthetic confidence shown on histogram tooltips. Not a model output.

/// Byte count below which confidence sits in the 20..30 floor band.
const LOW_BYTES: f64 = 2000.0;

/// Byte count above which confidence saturates into the 90..100 band.
const HIGH_BYTES: f64 = 8000.0;

/// Confidence percentage for a sample of `bytes`.
///
/// Piecewise linear: 20..30 below [`LOW_BYTES`], 30..90 through the middle
/// band, 90..100 above [`HIGH_BYTES`]. In the top band the remaining
/// headroom is measured against `observed_max` (the largest byte count in
/// the current window) when that exceeds the high threshold, and against a
/// fixed 2k span otherwise.
pub fn confidence_percent(bytes: f64, observed_max: Option<f64>) -> f64 {
    let b = bytes.max(0.0);
    if b < LOW_BYTES {
        return 20.0 + (b / LOW_BYTES) * 10.0;
    }
    if b >= HIGH_BYTES {
        if let Some(max) = observed_max.filter(|m| *m > HIGH_BYTES) {
            let frac = ((b - HIGH_BYTES) / (max - HIGH_BYTES)).min(1.0);
            return 90.0 + frac * 10.0;
        }
        return 90.0 + ((b - HIGH_BYTES) / 2000.0).min(1.0) * 10.0;
    }
    30.0 + ((b - LOW_BYTES) / (HIGH_BYTES - LOW_BYTES)) * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(confidence_percent(0.0, None), 20.0);
        assert_eq!(confidence_percent(2000.0, None), 30.0);
        assert_eq!(confidence_percent(5000.0, None), 60.0);
        assert_eq!(confidence_percent(8000.0, Some(10000.0)), 90.0);
        assert_eq!(confidence_percent(10000.0, Some(10000.0)), 100.0);
    }

    #[test]
    fn test_fixed_fallback_when_window_max_is_small() {
        // no max, or max at/below the high threshold: 2k fixed headroom
        assert_eq!(confidence_percent(9000.0, None), 95.0);
        assert_eq!(confidence_percent(9000.0, Some(8000.0)), 95.0);
        assert_eq!(confidence_percent(20000.0, None), 100.0);
    }

    #[test]
    fn test_clamps_at_ceiling() {
        assert_eq!(confidence_percent(50000.0, Some(10000.0)), 100.0);
    }

    #[test]
    fn test_negative_bytes_floor() {
        assert_eq!(confidence_percent(-500.0, None), 20.0);
    }

    #[test]
    fn test_monotone_non_decreasing_for_fixed_max() {
        let max = Some(12000.0);
        let mut prev = f64::NEG_INFINITY;
        for step in 0..=240 {
            let bytes = step as f64 * 50.0;
            let c = confidence_percent(bytes, max);
            assert!(
                c >= prev,
                "confidence dropped from {} to {} at {} bytes",
                prev,
                c,
                bytes
            );
            prev = c;
        }
    }
}
