//! Shared application state for the svcprobe server.
//!
//! One aggregator, one readiness flag, one exporter, and one clock per process.
//! Handlers only see snapshots of the windows, never the windows themselves.

use std::sync::Arc;

use svcprobe_core::error::Result;
use svcprobe_core::{Clock, MetricsAggregator, MetricsSnapshot, MonotonicClock, ProbeState};

use crate::config::ServiceConfig;
use crate::obs::Exporter;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    clock: Arc<dyn Clock>,
    aggregator: MetricsAggregator,
    probe: ProbeState,
    exporter: Exporter,
}

impl AppState {
    /// Build application state on the process monotonic clock.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        Self::with_clock(cfg, Arc::new(MonotonicClock::new()))
    }

    /// Every recorder shares `clock`, which keeps window entries ordered.
    pub fn with_clock(cfg: ServiceConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let exporter = Exporter::new(&cfg.labels)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                clock,
                aggregator: MetricsAggregator::new(),
                probe: ProbeState::new(),
                exporter,
            }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.inner.clock)
    }

    pub fn aggregator(&self) -> &MetricsAggregator {
        &self.inner.aggregator
    }

    pub fn probe(&self) -> &ProbeState {
        &self.inner.probe
    }

    pub fn exporter(&self) -> &Exporter {
        &self.inner.exporter
    }

    /// Snapshot the windows at the current clock reading.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.aggregator.snapshot(self.inner.clock.now())
    }
}
