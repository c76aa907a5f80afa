//! svcprobe server library entry.
//!
//! Wires configuration, the shared metrics aggregator, readiness state, and the
//! HTTP handlers into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
