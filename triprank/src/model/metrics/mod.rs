mod display_value;
mod drive_baseline;
pub mod ingest_ops;
mod metrics_change;
mod route_metrics;

pub use display_value::{CoarseMinutes, CompactNumber, TimeSavings};
pub use drive_baseline::DriveBaseline;
pub use metrics_change::MetricsChange;
pub use route_metrics::RouteMetrics;
