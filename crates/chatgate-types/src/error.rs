use thiserror::Error;

/// Errors produced while brokering a session or relaying a handoff.
///
/// The taxonomy separates deployment defects (`Configuration`) from
/// incomplete requests (`Validation`), failures reported by a dependency
/// (`Upstream`, `Delivery`), and everything else (`Unexpected`).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required secret or URL is absent from the process configuration.
    /// Fatal for the request; signals a deployment defect, never retried.
    #[error("missing configuration: {0}")]
    Configuration(String),

    /// The request is well-formed but incomplete (missing required field).
    #[error("{0}")]
    Validation(String),

    /// The upstream session provider returned a non-success status.
    /// Status and body are carried verbatim so the session endpoint can
    /// pass them through unchanged.
    #[error("upstream returned HTTP {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    /// The notification sink rejected the delivery. The sink's response
    /// body is not meant for end users, so only a summary is carried.
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    /// Network-level or otherwise unclassified failure. Always caught at
    /// the handler and reported as a generic error with no detail leaked.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
