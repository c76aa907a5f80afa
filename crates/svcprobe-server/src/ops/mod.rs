//! Operational HTTP endpoints.
//!
//! - `/health`         : liveness, always 200
//! - `/ready`          : readiness (503 when disabled)
//! - `/ready/enable`   : mark ready
//! - `/ready/disable`  : mark not ready
//! - `/metrics`        : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{app_state::AppState, error::ApiError, obs};

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusBody { status: "OK" }))
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.probe().is_ready() {
        (StatusCode::OK, Json(StatusBody { status: "OK" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusBody {
                status: "Service unavailable",
            }),
        )
    }
}

pub async fn ready_enable(State(state): State<AppState>) -> impl IntoResponse {
    let was = state.probe().set_ready(true);
    tracing::info!(was_ready = was, "readiness enabled");
    (StatusCode::ACCEPTED, "Readiness enabled")
}

pub async fn ready_disable(State(state): State<AppState>) -> impl IntoResponse {
    let was = state.probe().set_ready(false);
    tracing::info!(was_ready = was, "readiness disabled");
    (StatusCode::ACCEPTED, "Readiness disabled")
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snap = state.snapshot();
    let body = state.exporter().render(&snap)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, obs::metrics::CONTENT_TYPE)],
        body,
    )
        .into_response())
}
