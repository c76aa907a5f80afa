//! Prometheus registry for the service.
//!
//! Three gauges, all labeled with the configured namespace/pod:
//! - `requests_per_second`: trailing 1-second request count at scrape time
//! - `average_request_duration_seconds`: trailing 60-second mean duration at scrape time
//! - `request_duration_seconds`: duration of the latest request per method/endpoint

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use svcprobe_core::error::{Result, SvcProbeError};
use svcprobe_core::MetricsSnapshot;

use crate::config::LabelSection;

/// Content type of the text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

fn internal(e: prometheus::Error) -> SvcProbeError {
    SvcProbeError::Internal(format!("prometheus: {e}"))
}

fn gauge_vec(registry: &Registry, name: &str, help: &str, labels: &[&str]) -> Result<GaugeVec> {
    let g = GaugeVec::new(Opts::new(name, help), labels).map_err(internal)?;
    registry.register(Box::new(g.clone())).map_err(internal)?;
    Ok(g)
}

pub struct Exporter {
    registry: Registry,
    namespace: String,
    pod: String,
    requests_per_second: GaugeVec,
    average_request_duration: GaugeVec,
    request_duration: GaugeVec,
}

impl Exporter {
    pub fn new(labels: &LabelSection) -> Result<Self> {
        let registry = Registry::new();
        let requests_per_second = gauge_vec(
            &registry,
            "requests_per_second",
            "The number of requests per second.",
            &["namespace", "pod"],
        )?;
        let request_duration = gauge_vec(
            &registry,
            "request_duration_seconds",
            "The duration of HTTP requests.",
            &["namespace", "pod", "method", "endpoint"],
        )?;
        let average_request_duration = gauge_vec(
            &registry,
            "average_request_duration_seconds",
            "Average duration of HTTP requests in the last minute.",
            &["namespace", "pod"],
        )?;

        Ok(Self {
            registry,
            namespace: labels.namespace.clone(),
            pod: labels.pod.clone(),
            requests_per_second,
            average_request_duration,
            request_duration,
        })
    }

    /// Set the per-request duration gauge for this method/endpoint.
    pub fn observe_request(&self, method: &str, endpoint: &str, secs: f64) {
        self.request_duration
            .with_label_values(&[self.namespace.as_str(), self.pod.as_str(), method, endpoint])
            .set(secs);
    }

    /// Copy `snap` into the windowed gauges and encode the whole registry.
    pub fn render(&self, snap: &MetricsSnapshot) -> Result<String> {
        let base = [self.namespace.as_str(), self.pod.as_str()];
        self.requests_per_second
            .with_label_values(&base)
            .set(snap.requests_per_second as f64);
        self.average_request_duration
            .with_label_values(&base)
            .set(snap.average_duration_seconds);

        let families = self.registry.gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(internal)?;
        String::from_utf8(buf)
            .map_err(|e| SvcProbeError::Internal(format!("metrics not utf-8: {e}")))
    }
}
