//! Handoff relay handler.
//!
//! `POST /api/handoff` -- validates a visitor-submitted contact/transcript
//! payload, stamps it with a correlation ticket id, and delivers a formatted
//! notification to the configured webhook sink. Unlike the session endpoint,
//! sink failures are reported opaquely: the sink's response body is not
//! meant for end users.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

use chatgate_core::handoff;
use chatgate_types::error::GatewayError;
use chatgate_types::handoff::HandoffEvent;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/handoff - Relay a handoff event to the notification sink.
pub async fn relay_handoff(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::now_v7();

    let event: HandoffEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(err) => {
            tracing::error!(%request_id, error = %err, "unreadable handoff payload");
            return AppError::Internal("Failed to process handoff").into_response();
        }
    };

    // Field validation short-circuits before any network call.
    if handoff::validate(&event).is_err() {
        return AppError::Validation("Missing required fields: name and email").into_response();
    }

    let Some(sink) = state.sink.as_deref() else {
        tracing::error!(%request_id, "SLACK_WEBHOOK_URL is not configured");
        return AppError::Configuration("Server misconfiguration").into_response();
    };

    let ticket_id = handoff::generate_ticket_id();
    let text = handoff::format_notification(&event, &ticket_id);

    tracing::info!(%request_id, %ticket_id, kind = ?event.kind, "relaying handoff");

    match sink.deliver(&text).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(GatewayError::Delivery(err)) => {
            tracing::error!(%request_id, %ticket_id, error = %err, "handoff delivery failed");
            AppError::Internal("Slack webhook failed").into_response()
        }
        Err(err) => {
            tracing::error!(%request_id, %ticket_id, error = %err, "handoff relay failed");
            AppError::Internal("Failed to process handoff").into_response()
        }
    }
}

/// Any non-POST method on the handoff endpoint.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
        .into_response()
}
