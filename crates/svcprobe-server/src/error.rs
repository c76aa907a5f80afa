//! HTTP mapping for handler errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use svcprobe_core::SvcProbeError;

#[derive(Debug)]
pub struct ApiError(pub SvcProbeError);

impl From<SvcProbeError> for ApiError {
    fn from(e: SvcProbeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Handlers only fail on exporter/encoding problems.
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        tracing::error!(error = %self.0, "request failed");
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
