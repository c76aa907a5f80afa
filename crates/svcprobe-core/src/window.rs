//! Sliding time windows with lazy front-truncation eviction.
//!
//! Entries are appended at call time from one shared monotonic clock, so the
//! backing deque is always sorted by timestamp. Eviction therefore only pops
//! from the front and stops at the first entry still inside the horizon.
//!
//! An entry with `timestamp == now - horizon` is outside the window (the lower
//! bound is exclusive).
//!
//! Every read evicts, so reads mutate. Callers sharing a window across threads
//! must serialize all access, see [`crate::MetricsAggregator`].

use std::collections::VecDeque;

use crate::error::{Result, SvcProbeError};

/// Horizon for the request-rate window.
pub const RATE_HORIZON_SECS: f64 = 1.0;
/// Horizon for the request-duration window.
pub const DURATION_HORIZON_SECS: f64 = 60.0;

fn clamp_horizon(secs: f64) -> f64 {
    if secs > 0.0 {
        secs
    } else {
        0.0
    }
}

/// Pop every front entry whose timestamp is strictly older than `now - horizon`.
fn evict_front<T>(entries: &mut VecDeque<T>, now: f64, horizon: f64, ts: impl Fn(&T) -> f64) {
    let cutoff = now - horizon;
    while let Some(front) = entries.front() {
        if ts(front) < cutoff {
            entries.pop_front();
        } else {
            break;
        }
    }
}

/// Arrival timestamps of a recurring event within a fixed horizon.
#[derive(Debug, Clone)]
pub struct SlidingWindowCounter {
    horizon: f64,
    entries: VecDeque<f64>,
}

impl SlidingWindowCounter {
    /// Counter with the 1-second request-rate horizon.
    pub fn new() -> Self {
        Self::with_horizon(RATE_HORIZON_SECS)
    }

    /// A NaN or non-positive horizon is clamped to 0.0 so eviction still runs.
    pub fn with_horizon(horizon_secs: f64) -> Self {
        Self {
            horizon: clamp_horizon(horizon_secs),
            entries: VecDeque::new(),
        }
    }

    /// Append an arrival. `now` is expected to be >= the last recorded value.
    pub fn record(&mut self, now: f64) {
        self.entries.push_back(now);
    }

    pub fn evict_expired(&mut self, now: f64) {
        evict_front(&mut self.entries, now, self.horizon, |t| *t);
    }

    /// Evict, then return how many arrivals remain in the window.
    pub fn count(&mut self, now: f64) -> usize {
        self.evict_expired(now);
        self.entries.len()
    }

    /// Stored entries without evicting.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn timestamps(&self) -> Vec<f64> {
        self.entries.iter().copied().collect()
    }
}

impl Default for SlidingWindowCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// `(timestamp, value)` samples within a fixed horizon, averaged on read.
///
/// The sum is recomputed from the retained samples on every [`average`] call.
/// Read cost is O(window size), bounded by arrival rate times the horizon, and
/// no floating-point error accumulates over the life of the process. A very
/// high-throughput deployment would keep a running sum decremented on eviction
/// instead.
///
/// [`average`]: SlidingWindowAverage::average
#[derive(Debug, Clone)]
pub struct SlidingWindowAverage {
    horizon: f64,
    samples: VecDeque<(f64, f64)>,
}

impl SlidingWindowAverage {
    /// Average with the 60-second request-duration horizon.
    pub fn new() -> Self {
        Self::with_horizon(DURATION_HORIZON_SECS)
    }

    /// Same clamping as [`SlidingWindowCounter::with_horizon`].
    pub fn with_horizon(horizon_secs: f64) -> Self {
        Self {
            horizon: clamp_horizon(horizon_secs),
            samples: VecDeque::new(),
        }
    }

    /// Append a sample. `value` must already be finite and non-negative,
    /// see [`validate_duration`].
    pub fn record(&mut self, now: f64, value: f64) {
        self.samples.push_back((now, value));
    }

    pub fn evict_expired(&mut self, now: f64) {
        evict_front(&mut self.samples, now, self.horizon, |(t, _)| *t);
    }

    /// Evict, then return the mean of the remaining values, or 0.0 when empty.
    pub fn average(&mut self, now: f64) -> f64 {
        self.evict_expired(now);
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(|(_, v)| v).sum();
        total / self.samples.len() as f64
    }

    /// Stored samples without evicting.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn timestamps(&self) -> Vec<f64> {
        self.samples.iter().map(|(t, _)| *t).collect()
    }
}

impl Default for SlidingWindowAverage {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary check for a measured duration before it reaches a window.
pub fn validate_duration(secs: f64) -> Result<f64> {
    if !secs.is_finite() {
        return Err(SvcProbeError::InvalidSample(format!(
            "duration must be finite, got {secs}"
        )));
    }
    if secs < 0.0 {
        return Err(SvcProbeError::InvalidSample(format!(
            "duration must be non-negative, got {secs}"
        )));
    }
    Ok(secs)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_counter_is_zero() {
        let mut c = SlidingWindowCounter::new();
        assert_eq!(c.count(123.0), 0);
    }

    #[test]
    fn counter_keeps_entries_strictly_inside_horizon() {
        let mut c = SlidingWindowCounter::new();
        for t in [8.5, 9.0, 9.25, 9.5, 10.0] {
            c.record(t);
        }
        // cutoff = 9.0: 8.5 and 9.0 are out.
        assert_eq!(c.count(10.0), 3);
        assert_eq!(c.entries, VecDeque::from(vec![9.25, 9.5, 10.0]));
    }

    #[test]
    fn boundary_entry_is_evicted() {
        let mut c = SlidingWindowCounter::new();
        c.record(9.0);
        assert_eq!(c.count(10.0), 0);

        let mut a = SlidingWindowAverage::new();
        a.record(40.0, 5.0);
        assert_eq!(a.average(100.0), 0.0);
        assert!(a.is_empty());
    }

    #[test]
    fn count_equals_entries_newer_than_cutoff() {
        let stamps: Vec<f64> = (0..40).map(|i| i as f64 * 0.125).collect();
        for now in [0.0, 0.6, 1.0, 2.3, 4.875, 5.0, 7.0] {
            let mut c = SlidingWindowCounter::new();
            for &t in &stamps {
                c.record(t);
            }
            let expected = stamps.iter().filter(|&&t| t > now - 1.0).count();
            assert_eq!(c.count(now), expected, "now={now}");
        }
    }

    #[test]
    fn repeated_reads_are_stable() {
        let mut c = SlidingWindowCounter::new();
        c.record(1.0);
        c.record(1.4);
        c.record(1.9);
        let first = c.count(2.2);
        let second = c.count(2.2);
        assert_eq!(first, 2);
        assert_eq!(first, second);

        let mut a = SlidingWindowAverage::new();
        a.record(1.0, 0.2);
        a.record(2.0, 0.4);
        assert_eq!(a.average(30.0), a.average(30.0));
    }

    #[test]
    fn later_reads_retain_a_subset() {
        let mut c = SlidingWindowCounter::with_horizon(2.0);
        for i in 0..20 {
            c.record(i as f64 * 0.25);
        }
        let mut prev: Vec<f64> = {
            c.count(3.0);
            c.entries.iter().copied().collect()
        };
        for now in [3.1, 3.5, 4.0, 4.75, 6.0, 9.0] {
            c.count(now);
            let cur: Vec<f64> = c.entries.iter().copied().collect();
            assert!(cur.iter().all(|t| prev.contains(t)), "now={now}");
            assert!(cur.len() <= prev.len());
            prev = cur;
        }
        assert!(prev.is_empty());
    }

    #[test]
    fn average_of_samples_at_same_instant() {
        let mut a = SlidingWindowAverage::new();
        for v in [1.0, 2.0, 3.0] {
            a.record(50.0, v);
        }
        assert_eq!(a.average(50.0), 2.0);
    }

    #[test]
    fn average_of_empty_window_is_zero_not_nan() {
        let mut a = SlidingWindowAverage::new();
        let avg = a.average(0.0);
        assert!(!avg.is_nan());
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn average_drops_old_samples() {
        let mut a = SlidingWindowAverage::new();
        a.record(0.0, 10.0);
        a.record(30.0, 2.0);
        a.record(61.0, 4.0);
        // cutoff 1.0 drops the first sample
        assert_eq!(a.average(61.0), 3.0);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn out_of_order_record_is_tolerated() {
        let mut c = SlidingWindowCounter::new();
        c.record(5.0);
        c.record(3.0);
        // Front entry is inside the window, so the stale one behind it is retained.
        assert_eq!(c.count(5.5), 2);
    }

    #[test]
    fn invalid_horizon_still_evicts() {
        for bad in [f64::NAN, -1.0, 0.0] {
            let mut c = SlidingWindowCounter::with_horizon(bad);
            c.record(1.0);
            c.record(2.0);
            assert_eq!(c.count(3.0), 0, "horizon={bad}");

            let mut a = SlidingWindowAverage::with_horizon(bad);
            a.record(1.0, 4.0);
            assert_eq!(a.average(2.0), 0.0, "horizon={bad}");
            assert!(a.is_empty());
        }
    }

    #[test]
    fn validate_duration_rejects_bad_values() {
        assert_eq!(validate_duration(0.0).ok(), Some(0.0));
        assert_eq!(validate_duration(0.25).ok(), Some(0.25));
        for bad in [-0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_duration(bad).expect_err("must reject");
            assert_eq!(err.client_code().as_str(), "INVALID_SAMPLE");
        }
    }
}
