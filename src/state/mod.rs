//! State Management
//!
//! Global theme/notification state plus the per-page reactive stores.

pub mod comparison;
pub mod global;
pub mod live;
pub mod prediction;

pub use comparison::{ComparisonResult, ComparisonStore};
pub use global::{provide_global_state, GlobalState, Palette, ThemeMode};
pub use live::{LiveWindow, TrafficSample, LIVE_WINDOW};
pub use prediction::PredictionStore;
