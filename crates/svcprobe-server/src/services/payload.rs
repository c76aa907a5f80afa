//! Synthetic CPU workload: a Fibonacci number for a random index.

use axum::Json;
use rand::Rng;
use serde::Serialize;

/// Inclusive bounds for the random index.
pub const MIN_N: u64 = 1;
pub const MAX_N: u64 = 10_000;

#[derive(Debug, Serialize)]
pub struct PayloadBody {
    pub n: u64,
    pub fib: u64,
}

/// F(n) with F(0) = 0, F(1) = 1. Overflow wraps modulo 2^64.
pub fn fibonacci(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

pub async fn payload() -> Json<PayloadBody> {
    let n = rand::thread_rng().gen_range(MIN_N..=MAX_N);
    Json(PayloadBody { n, fib: fibonacci(n) })
}
