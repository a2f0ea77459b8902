//! Session bootstrap request/response types.
//!
//! The browser widget posts an optional JSON body selecting a workflow; the
//! gateway responds with the narrowed credential it obtained upstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a session bootstrap request. Every field is optional: an empty
/// or malformed body resolves to the configured default workflow.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SessionRequest {
    /// Preferred workflow selector, `{"workflow": {"id": "wf_..."}}`.
    #[serde(default)]
    pub workflow: Option<WorkflowRef>,

    /// Flat fallback selector, `{"workflowId": "wf_..."}`.
    #[serde(default, rename = "workflowId")]
    pub workflow_id: Option<String>,
}

/// Reference to a hosted conversational workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// The short-lived credential forwarded to the browser.
///
/// Only these two upstream fields ever reach the client; everything else in
/// the provider's response is discarded. The values are kept as raw JSON so
/// they are forwarded untouched. Never logged, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCredential {
    #[serde(skip_serializing_if = "Value::is_null")]
    pub client_secret: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub expires_after: Value,
}
