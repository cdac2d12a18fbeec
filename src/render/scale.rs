//! Axis Scales
//!
//! Linear and time scales with tick generation, matching the usual
//! 1/2/5-decade tick snapping.

use chrono::{DateTime, Utc};

/// Maps a numeric domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Round the domain outward to tick-friendly bounds.
    pub fn nice(mut self, count: usize) -> Self {
        let step = tick_increment(self.d0.min(self.d1), self.d0.max(self.d1), count);
        if step > 0.0 {
            let lo = (self.d0.min(self.d1) / step).floor() * step;
            let hi = (self.d0.max(self.d1) / step).ceil() * step;
            if self.d0 <= self.d1 {
                self.d0 = lo;
                self.d1 = hi;
            } else {
                self.d0 = hi;
                self.d1 = lo;
            }
        }
        self
    }

    pub fn scale(&self, v: f64) -> f64 {
        if (self.d1 - self.d0).abs() < f64::EPSILON {
            return self.r0;
        }
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    /// Round values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 {
            (self.d0, self.d1)
        } else {
            (self.d1, self.d0)
        };
        let step = tick_increment(lo, hi, count);
        if step <= 0.0 {
            return vec![lo];
        }
        let start = (lo / step).ceil();
        let stop = (hi / step).floor();
        let mut out = Vec::new();
        let mut i = start;
        while i <= stop {
            out.push(i * step);
            i += 1.0;
        }
        out
    }
}

/// Step size yielding about `count` ticks, snapped to 1/2/5 decades.
fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if span <= 0.0 || count == 0 {
        return 0.0;
    }
    let step = span / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 7.07 {
        10.0
    } else if error >= 3.16 {
        5.0
    } else if error >= 1.41 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Maps a time domain onto a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new(
                (
                    domain.0.timestamp_millis() as f64,
                    domain.1.timestamp_millis() as f64,
                ),
                range,
            ),
        }
    }

    pub fn scale(&self, t: DateTime<Utc>) -> f64 {
        self.inner.scale(t.timestamp_millis() as f64)
    }

    /// Evenly spaced instants across the domain, `count` intervals.
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (d0, d1) = self.inner.domain();
        if count == 0 || d1 <= d0 {
            return Vec::new();
        }
        (0..=count)
            .filter_map(|i| {
                let ms = d0 + (d1 - d0) * (i as f64 / count as f64);
                DateTime::from_timestamp_millis(ms as i64)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_linear_scale_endpoints_and_midpoint() {
        let s = LinearScale::new((0.0, 100.0), (0.0, 800.0));
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(100.0), 800.0);
        assert_eq!(s.scale(50.0), 400.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // y axes run top-down
        let s = LinearScale::new((0.0, 10.0), (310.0, 0.0));
        assert_eq!(s.scale(0.0), 310.0);
        assert_eq!(s.scale(10.0), 0.0);
    }

    #[test]
    fn test_degenerate_domain_does_not_divide_by_zero() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.scale(5.0), 0.0);
    }

    #[test]
    fn test_nice_rounds_outward() {
        let s = LinearScale::new((0.0, 8734.0), (310.0, 0.0)).nice(4);
        assert_eq!(s.domain(), (0.0, 10000.0));
    }

    #[test]
    fn test_ticks_snap_to_round_steps() {
        let s = LinearScale::new((0.0, 10000.0), (310.0, 0.0));
        assert_eq!(s.ticks(4), vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10000.0]);
    }

    #[test]
    fn test_time_scale_maps_linearly() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 20).unwrap();
        let s = TimeScale::new((t0, t1), (0.0, 690.0));
        assert_eq!(s.scale(t0), 0.0);
        assert_eq!(s.scale(t1), 690.0);
        let mid = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 10).unwrap();
        assert_eq!(s.scale(mid), 345.0);
    }

    #[test]
    fn test_time_ticks_cover_domain() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 20).unwrap();
        let ticks = TimeScale::new((t0, t1), (0.0, 690.0)).ticks(5);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], t0);
        assert_eq!(*ticks.last().unwrap(), t1);
    }
}
