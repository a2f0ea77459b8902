//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! Two rendering modes coexist deliberately: most errors become an opaque
//! `{"error": ...}` body, but upstream session-provider failures are proxied
//! transparently with their original status and body -- that error shape is
//! meant for the browser's chat client. The notification sink's errors are
//! never proxied.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Required secret or URL absent from deployment configuration.
    Configuration(&'static str),
    /// Request is well-formed but incomplete.
    Validation(&'static str),
    /// Upstream session-provider failure, passed through unchanged.
    Upstream {
        status: u16,
        body: serde_json::Value,
    },
    /// Generic failure; the message is a fixed, caller-safe string and any
    /// internal detail has already been logged at the call site.
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(body)).into_response()
            }
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
