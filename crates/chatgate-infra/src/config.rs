//! Gateway configuration read from the process environment.
//!
//! Constructed once at startup and passed into components by parameter, so
//! handlers stay testable with injected fake configuration. A configuration
//! change requires a restart.

use secrecy::SecretString;

/// Default base URL of the upstream AI-session provider.
pub const DEFAULT_CHATKIT_BASE: &str = "https://api.openai.com";

/// Process-level configuration consumed by both endpoints.
///
/// Required pieces (`openai_api_key`, `slack_webhook_url`) are kept optional
/// here: their absence is reported per request as a configuration error by
/// the endpoint that needs them, not at startup, matching the rest of the
/// gateway's fail-per-request behavior.
pub struct GatewayConfig {
    /// Bearer secret for the ChatKit session API. Never logged.
    pub openai_api_key: Option<SecretString>,
    /// Default workflow when the request body names none.
    pub default_workflow_id: Option<String>,
    /// Webhook URL for handoff notifications. The URL is the only secret.
    pub slack_webhook_url: Option<String>,
    /// Base URL of the session provider; overridable for tests and proxies.
    pub chatkit_base_url: String,
    /// Attach `Secure` to minted continuity cookies. On by default; turned
    /// off for plain-HTTP local development.
    pub secure_cookies: bool,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// Variables: `OPENAI_API_KEY`, `CHATKIT_WORKFLOW_ID`,
    /// `SLACK_WEBHOOK_URL`, `CHATKIT_API_BASE`, `CHATGATE_SECURE_COOKIES`.
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty(env_var("OPENAI_API_KEY")).map(SecretString::from),
            default_workflow_id: non_empty(env_var("CHATKIT_WORKFLOW_ID")),
            slack_webhook_url: non_empty(env_var("SLACK_WEBHOOK_URL")),
            chatkit_base_url: non_empty(env_var("CHATKIT_API_BASE"))
                .unwrap_or_else(|| DEFAULT_CHATKIT_BASE.to_string()),
            secure_cookies: parse_flag(env_var("CHATGATE_SECURE_COOKIES"), true),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Treat empty strings as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a boolean flag, falling back to `default` when unset or
/// unrecognized.
fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("1") | Some("true") | Some("on") | Some("yes") => true,
        Some("0") | Some("false") | Some("off") | Some("no") => false,
        _ => default,
    }
}
