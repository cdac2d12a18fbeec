//! Donut Slice Geometry
//!
//! Angles are radians from 12 o'clock, increasing clockwise, the usual pie
//! layout convention.

use std::f64::consts::{PI, TAU};

use crate::render::tween::Interpolate;

/// Angular span of one donut slice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
}

impl SliceAngles {
    /// Degenerate span collapsed at this slice's end angle. New slices
    /// sweep open from here.
    pub fn collapsed_at_end(&self) -> SliceAngles {
        SliceAngles {
            start: self.end,
            end: self.end,
        }
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

impl Interpolate for SliceAngles {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        SliceAngles {
            start: self.start.lerp(&other.start, t),
            end: self.end.lerp(&other.end, t),
        }
    }
}

/// Divide the circle among `values` in input order.
pub fn pie_layout(values: &[f64]) -> Vec<SliceAngles> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return values.iter().map(|_| SliceAngles::default()).collect();
    }
    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let share = if v.is_finite() && *v > 0.0 { *v } else { 0.0 };
            let span = share / total * TAU;
            let s = SliceAngles {
                start: angle,
                end: angle + span,
            };
            angle += span;
            s
        })
        .collect()
}

/// Point on the circle of radius `r` at `angle`.
fn point_at(r: f64, angle: f64) -> (f64, f64) {
    (r * angle.sin(), -r * angle.cos())
}

/// SVG path data for a ring slice, both edges inset by half of `pad_angle`.
pub fn donut_path(a: SliceAngles, inner_r: f64, outer_r: f64, pad_angle: f64) -> String {
    let span = a.end - a.start;
    if span <= 0.0 {
        return String::new();
    }
    let pad = (pad_angle.max(0.0) / 2.0).min(span / 2.0);
    let (s, e) = (a.start + pad, a.end - pad);
    if e - s <= 1e-6 {
        return String::new();
    }

    let large = if e - s > PI { 1 } else { 0 };
    let (x0, y0) = point_at(outer_r, s);
    let (x1, y1) = point_at(outer_r, e);
    let (x2, y2) = point_at(inner_r, e);
    let (x3, y3) = point_at(inner_r, s);

    format!(
        "M{:.3},{:.3}A{:.3},{:.3} 0 {} 1 {:.3},{:.3}L{:.3},{:.3}A{:.3},{:.3} 0 {} 0 {:.3},{:.3}Z",
        x0, y0, outer_r, outer_r, large, x1, y1, x2, y2, inner_r, inner_r, large, x3, y3
    )
}

/// Midpoint of the slice at the ring's mean radius. With `inner_r` equal to
/// `outer_r` this is the label anchor on that circle.
pub fn centroid(a: SliceAngles, inner_r: f64, outer_r: f64) -> (f64, f64) {
    point_at((inner_r + outer_r) / 2.0, a.mid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_proportional_and_contiguous() {
        let slices = pie_layout(&[0.5, 0.25, 0.25]);
        assert_eq!(slices.len(), 3);
        assert!((slices[0].end - slices[0].start - PI).abs() < 1e-12);
        assert_eq!(slices[0].end, slices[1].start);
        assert_eq!(slices[1].end, slices[2].start);
        assert!((slices[2].end - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_layout_of_nothing_is_degenerate() {
        let slices = pie_layout(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.start == 0.0 && s.end == 0.0));
    }

    #[test]
    fn test_centroid_of_top_slice_points_up() {
        // slice straddling 12 o'clock
        let a = SliceAngles { start: -0.2, end: 0.2 };
        let (x, y) = centroid(a, 75.0, 100.0);
        assert!(x.abs() < 1e-9);
        assert!((y + 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_side_follows_mid_angle() {
        let right = SliceAngles { start: 0.0, end: PI };
        let (x, _) = centroid(right, 100.0, 100.0);
        assert!(x > 0.0);

        let left = SliceAngles { start: PI, end: TAU };
        let (x, _) = centroid(left, 100.0, 100.0);
        assert!(x < 0.0);
    }

    #[test]
    fn test_path_shape() {
        let a = SliceAngles { start: 0.0, end: PI / 2.0 };
        let d = donut_path(a, 75.0, 100.0, 0.08);
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('A').count(), 2);
    }

    #[test]
    fn test_empty_and_overpadded_slices_emit_nothing() {
        assert_eq!(donut_path(SliceAngles::default(), 75.0, 100.0, 0.08), "");
        let thin = SliceAngles { start: 0.0, end: 1e-9 };
        assert_eq!(donut_path(thin, 75.0, 100.0, 0.08), "");
    }

    #[test]
    fn test_collapsed_entry_geometry() {
        let a = SliceAngles { start: 1.0, end: 2.5 };
        let c = a.collapsed_at_end();
        assert_eq!(c.start, 2.5);
        assert_eq!(c.end, 2.5);
    }
}
