//! ChatKit session client -- mints workflow-scoped chat credentials.
//!
//! Sends a single `POST /v1/chatkit/sessions` to the upstream provider with
//! bearer authentication and the beta-feature marker header. No retry: the
//! request either succeeds, fails with the upstream's own status and body
//! (carried verbatim for pass-through), or fails at the network level.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use chatgate_types::error::GatewayError;
use chatgate_types::session::SessionCredential;

/// Sub-path of the session-minting endpoint.
const SESSIONS_PATH: &str = "/v1/chatkit/sessions";

/// Client for the upstream ChatKit session API.
// Intentionally no Debug derive: the SecretString field already guards the
// key, but omitting Debug entirely keeps internal state out of logs.
pub struct ChatKitClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl ChatKitClient {
    /// The ChatKit beta marker header value.
    const API_BETA: &'static str = "chatkit_beta=v1";

    /// Create a new client against the given base URL.
    pub fn new(api_key: SecretString, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Mint a session credential scoped to one workflow and one visitor.
    ///
    /// On upstream non-success the status code and response body are
    /// returned unchanged in [`GatewayError::Upstream`]; the session
    /// endpoint proxies them transparently. On success only the two fields
    /// the browser needs are kept -- internal upstream metadata never
    /// leaves the gateway.
    pub async fn create_session(
        &self,
        workflow_id: &str,
        visitor_id: &str,
    ) -> Result<SessionCredential, GatewayError> {
        let url = format!("{}{}", self.base_url, SESSIONS_PATH);
        let body = json!({
            "workflow": { "id": workflow_id },
            "user": visitor_id,
            "chatkit_configuration": {
                "file_upload": { "enabled": true },
            },
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("OpenAI-Beta", Self::API_BETA)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Unexpected(format!("session request failed: {e}")))?;

        let status = response.status();
        // Best-effort body parse; a non-JSON body becomes an empty object
        // so error pass-through still yields well-formed JSON.
        let payload: Value = response.json().await.unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body: payload,
            });
        }

        Ok(SessionCredential {
            client_secret: payload.get("client_secret").cloned().unwrap_or(Value::Null),
            expires_after: payload.get("expires_after").cloned().unwrap_or(Value::Null),
        })
    }
}
