//! JSON envelopes and error-to-response mapping

use crate::PrepError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Successful envelope: `{"success": true, ...payload fields}`
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Success<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Failure envelope: `{"success": false, "error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl Failure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// HTTP status for an error surfaced at the API boundary
pub(crate) fn status_for(error: &PrepError) -> StatusCode {
    match error {
        PrepError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        PrepError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        e if e.is_fetch_failure() => StatusCode::BAD_GATEWAY,
        PrepError::Decode { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for PrepError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::warn!("Request failed: {}", self);
        } else {
            tracing::info!("Rejected request: {}", self);
        }

        (status, Json(Failure::new(self.to_string()))).into_response()
    }
}
