//! Request timing middleware.
//!
//! Wraps every route. Records the arrival into the rate window before the
//! handler runs and the measured duration into the duration window after it
//! returns. The clock is read under each window's lock so entries stay in
//! clock order. Durations that fail validation are dropped.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Endpoint label for requests that matched no route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

pub async fn track_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_owned());

    let clock = state.clock();
    let started = state.aggregator().record_request_start_at(clock.as_ref());

    let resp = next.run(req).await;

    match state
        .aggregator()
        .record_request_duration_at(clock.as_ref(), started)
    {
        Ok(secs) => {
            state.exporter().observe_request(&method, &endpoint, secs);
            tracing::debug!(
                %method,
                %endpoint,
                status = resp.status().as_u16(),
                secs,
                "request done"
            );
        }
        Err(e) => {
            tracing::warn!(%method, %endpoint, error = %e, "dropping request duration sample");
        }
    }

    resp
}
