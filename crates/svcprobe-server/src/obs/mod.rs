//! Observability: Prometheus exposition and per-request timing.
//!
//! The windowed statistics come from `svcprobe_core::MetricsAggregator`; this
//! module only copies them into gauges at scrape time and renders the text
//! format via the `prometheus` crate.

pub mod metrics;
pub mod timing;

pub use metrics::Exporter;
