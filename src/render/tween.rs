//! Easing and Geometry Interpolation
//!
//! A [`Tween`] carries a geometry from one snapshot to the next over a
//! fixed duration with cubic in-out easing.

/// Cubic ease-in-out over 0..1.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        (t * t * t) / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Linear blend between two geometries.
pub trait Interpolate: Clone {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for (f64, f64) {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        (self.0.lerp(&other.0, t), self.1.lerp(&other.1, t))
    }
}

/// Axis-aligned rectangle, used for canvas bars.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Interpolate for Rect {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Rect {
            x: self.x.lerp(&other.x, t),
            y: self.y.lerp(&other.y, t),
            w: self.w.lerp(&other.w, t),
            h: self.h.lerp(&other.h, t),
        }
    }
}

/// A geometry animating from `from` to `to` over `duration_ms`.
#[derive(Clone, Debug)]
pub struct Tween<G> {
    pub from: G,
    pub to: G,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl<G: Interpolate> Tween<G> {
    pub fn new(from: G, to: G, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Raw progress at `now_ms`, clamped to 0..1.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased geometry at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> G {
        self.from.lerp(&self.to, ease_cubic_in_out(self.progress(now_ms)))
    }

    pub fn done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Point the tween at a new target, starting from whatever geometry is
    /// currently displayed so mid-flight retargets stay continuous.
    pub fn retarget(&mut self, to: G, now_ms: f64, duration_ms: f64) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
    }

    #[test]
    fn test_easing_clamps_out_of_range() {
        assert_eq!(ease_cubic_in_out(-2.0), 0.0);
        assert_eq!(ease_cubic_in_out(3.0), 1.0);
    }

    #[test]
    fn test_easing_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_cubic_in_out(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_tween_samples_endpoints() {
        let tw = Tween::new(0.0, 10.0, 1000.0, 300.0);
        assert_eq!(tw.sample(1000.0), 0.0);
        assert_eq!(tw.sample(1300.0), 10.0);
        assert_eq!(tw.sample(2000.0), 10.0);
        assert!(!tw.done(1100.0));
        assert!(tw.done(1300.0));
    }

    #[test]
    fn test_zero_duration_is_done_immediately() {
        let tw = Tween::new(5.0, 5.0, 0.0, 0.0);
        assert!(tw.done(0.0));
        assert_eq!(tw.sample(0.0), 5.0);
    }

    #[test]
    fn test_retarget_is_continuous() {
        let mut tw = Tween::new(0.0, 10.0, 0.0, 400.0);
        let before = tw.sample(200.0);
        tw.retarget(-5.0, 200.0, 400.0);
        let after = tw.sample(200.0);
        assert!((before - after).abs() < 1e-12);
        assert_eq!(tw.sample(600.0), -5.0);
    }

    #[test]
    fn test_rect_lerp() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 0.0 };
        let b = Rect { x: 10.0, y: 20.0, w: 10.0, h: 40.0 };
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Rect { x: 5.0, y: 10.0, w: 10.0, h: 20.0 });
    }
}
