//! Axum router wiring.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops, services};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/ready", get(ops::ready))
        .route("/ready/enable", get(ops::ready_enable))
        .route("/ready/disable", get(ops::ready_disable))
        .route("/payload", get(services::payload::payload))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::timing::track_request,
        ))
        .with_state(state)
}
