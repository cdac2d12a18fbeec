//! Domain Logic
//!
//! Pure tables and functions behind the dashboard: feature vectors, the
//! traffic type taxonomy, probability shaping, and the display confidence
//! curve. Nothing in here touches the DOM, so it all tests natively.

pub mod confidence;
pub mod features;
pub mod probability;
pub mod traffic;
