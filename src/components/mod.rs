//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod animate;
pub mod dataset_metrics;
pub mod decision_flow;
pub mod feature_panel;
pub mod layer_diagram;
pub mod live_histogram;
pub mod loading;
pub mod nav;
pub mod pie_chart;
pub mod scroll_progress;
pub mod toast;

pub use dataset_metrics::DatasetMetrics;
pub use decision_flow::DecisionFlow;
pub use feature_panel::FeaturePanel;
pub use layer_diagram::LayerDiagram;
pub use live_histogram::LiveHistogram;
pub use nav::Nav;
pub use pie_chart::PieChart;
pub use scroll_progress::ScrollProgressBar;
pub use toast::Toast;
