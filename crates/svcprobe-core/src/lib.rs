//! svcprobe core: clock, sliding time windows, metrics aggregation, probe state.
//!
//! This crate holds the request-rate and request-duration windows shared by the
//! HTTP server and its tests. It intentionally carries no transport or runtime
//! dependencies; callers pass the current time in explicitly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Window operations are total over finite, non-negative inputs; the only
//! fallible surface is boundary validation and configuration.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod aggregator;
pub mod clock;
pub mod error;
pub mod probe;
pub mod window;

pub use aggregator::{MetricsAggregator, MetricsSnapshot};
pub use clock::{Clock, ManualClock, MonotonicClock};
/// Shared result type.
pub use error::{Result, SvcProbeError};
pub use probe::ProbeState;
pub use window::{validate_duration, SlidingWindowAverage, SlidingWindowCounter};
