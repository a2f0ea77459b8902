//! Session bootstrap handler.
//!
//! `POST /api/create-session` -- resolves the visitor identity from the
//! continuity cookie, resolves the workflow reference, and brokers a
//! short-lived credential from the upstream session provider. A freshly
//! minted continuity cookie is attached to every response produced after
//! identity resolution, error responses included, so a failed attempt does
//! not leave the browser without an identity.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use chatgate_core::{identity, workflow};
use chatgate_types::error::GatewayError;
use chatgate_types::session::SessionRequest;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/create-session - Mint a workflow-scoped session credential.
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = Uuid::now_v7();

    // A missing upstream secret is a deployment defect; bail out before
    // identity resolution or any network traffic.
    let Some(chatkit) = state.chatkit.as_deref() else {
        tracing::error!(%request_id, "OPENAI_API_KEY is not configured");
        return AppError::Configuration("Missing OPENAI_API_KEY").into_response();
    };

    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    let resolved = identity::resolve(cookie_header, state.config.secure_cookies);

    // Absent or malformed bodies degrade to an empty request.
    let request: SessionRequest = serde_json::from_slice(&body).unwrap_or_default();

    let outcome = match workflow::resolve_workflow(&request, state.config.default_workflow_id.as_deref())
    {
        None => Err(AppError::Validation("Missing workflow id")),
        Some(workflow_id) => {
            tracing::debug!(%request_id, %workflow_id, "requesting session credential");
            chatkit
                .create_session(&workflow_id, &resolved.visitor_id)
                .await
                .map_err(|err| match err {
                    GatewayError::Upstream { status, body } => {
                        tracing::warn!(%request_id, status, "upstream rejected session request");
                        AppError::Upstream { status, body }
                    }
                    other => {
                        tracing::error!(%request_id, error = %other, "session request failed");
                        AppError::Internal("Unexpected error")
                    }
                })
        }
    };

    let mut response = match outcome {
        Ok(credential) => (StatusCode::OK, Json(credential)).into_response(),
        Err(err) => err.into_response(),
    };

    attach_cookie(&mut response, resolved.minted_cookie.as_deref());
    response
}

/// Attach a freshly minted continuity cookie, if any, to the response.
fn attach_cookie(response: &mut Response, cookie: Option<&str>) {
    if let Some(cookie) = cookie
        && let Ok(value) = HeaderValue::from_str(cookie)
    {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}
