//! Error types for the horoscope API.
//!
//! [`ApiError`] covers every way a request can fail. All of them are the
//! caller's fault (bad dates, unknown zones, malformed bodies), so each
//! converts to a `400 Bad Request` JSON response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use horoscope_core::ChartError;
use tracing::warn;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The chart computation rejected the input.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// The request body was not valid JSON for the endpoint.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let message = self.to_string();
        warn!(error = %message, "request rejected");

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
