//! Error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures a handler can answer with.
///
/// Both variants render as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown id. `status` comes from the configured [`NotFoundMode`](crate::config::NotFoundMode).
    #[error("{entity} not found")]
    NotFound {
        entity: &'static str,
        status: StatusCode,
    },

    /// A store could not be reached.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound { status, .. } => *status,
            ApiError::Internal(message) => {
                error!(error = %message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
