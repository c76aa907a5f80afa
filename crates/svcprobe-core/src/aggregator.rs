//! Process-wide request metrics: trailing-second request count and
//! trailing-minute average duration.
//!
//! The two windows are owned exclusively and each sits behind its own mutex.
//! They are never read together atomically, so a snapshot may observe the rate
//! and the average at slightly different instants.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::clock::Clock;
use crate::error::Result;
use crate::window::{validate_duration, SlidingWindowAverage, SlidingWindowCounter};

/// Immutable read of the derived metrics at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Raw count of requests in the trailing 1-second window (not smoothed).
    pub requests_per_second: u64,
    /// Mean duration of requests completed in the trailing 60 seconds, 0.0 if none.
    pub average_duration_seconds: f64,
}

/// Construct once at startup, then share via Arc.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    rate: Mutex<SlidingWindowCounter>,
    durations: Mutex<SlidingWindowAverage>,
}

/// A window is structurally valid after any partial operation, so a poisoned
/// lock is recovered instead of propagating the panic to every later request.
fn lock_window<'a, T>(m: &'a Mutex<T>, name: &'static str) -> MutexGuard<'a, T> {
    m.lock().unwrap_or_else(|poisoned| {
        tracing::warn!(window = name, "metrics window lock poisoned; recovering");
        poisoned.into_inner()
    })
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pre-configured windows (custom horizons in tests).
    pub fn with_windows(rate: SlidingWindowCounter, durations: SlidingWindowAverage) -> Self {
        Self {
            rate: Mutex::new(rate),
            durations: Mutex::new(durations),
        }
    }

    pub fn record_request_start(&self, now: f64) {
        lock_window(&self.rate, "rate").record(now);
    }

    /// `duration_secs` must be validated by the caller.
    pub fn record_request_duration(&self, now: f64, duration_secs: f64) {
        lock_window(&self.durations, "duration").record(now, duration_secs);
    }

    /// Read `clock` while holding the rate lock and record the arrival.
    /// Concurrent callers therefore append in clock order. Returns the timestamp.
    pub fn record_request_start_at(&self, clock: &dyn Clock) -> f64 {
        let mut rate = lock_window(&self.rate, "rate");
        let now = clock.now();
        rate.record(now);
        now
    }

    /// Read `clock` while holding the duration lock, validate `now - started`,
    /// and record it. Invalid durations are returned as errors and not stored.
    pub fn record_request_duration_at(&self, clock: &dyn Clock, started: f64) -> Result<f64> {
        let mut durations = lock_window(&self.durations, "duration");
        let now = clock.now();
        let secs = validate_duration(now - started)?;
        durations.record(now, secs);
        Ok(secs)
    }

    pub fn snapshot(&self, now: f64) -> MetricsSnapshot {
        let requests_per_second = lock_window(&self.rate, "rate").count(now) as u64;
        let average_duration_seconds = lock_window(&self.durations, "duration").average(now);
        MetricsSnapshot {
            requests_per_second,
            average_duration_seconds,
        }
    }
}
