//! Workload endpoints.

pub mod payload;
