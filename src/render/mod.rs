//! Chart Rendering Support
//!
//! Scales, easing, keyed reconciliation, and arc geometry shared by the
//! chart components. Plain math throughout; the components own the actual
//! canvas and SVG drawing.

pub mod arc;
pub mod reconcile;
pub mod scale;
pub mod tween;

pub use reconcile::{diff_keyed, KeyedDiff, Phase, Stage};
pub use tween::{ease_cubic_in_out, Interpolate, Rect, Tween};
