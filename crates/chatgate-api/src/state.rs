//! Application state wiring the configuration and outbound clients.
//!
//! Built once at startup from [`GatewayConfig`] and cloned into every
//! handler. Clients for collaborators whose configuration is absent are
//! `None`; the endpoint that needs them reports the configuration error
//! per request.

use std::sync::Arc;

use chatgate_infra::chatkit::ChatKitClient;
use chatgate_infra::config::GatewayConfig;
use chatgate_infra::sink::WebhookSink;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    /// ChatKit session client; `None` when `OPENAI_API_KEY` is unset.
    pub chatkit: Option<Arc<ChatKitClient>>,
    /// Notification sink; `None` when `SLACK_WEBHOOK_URL` is unset.
    pub sink: Option<Arc<WebhookSink>>,
}

impl AppState {
    /// Wire clients from the given configuration. The API key moves into
    /// the client; it is not retained anywhere else.
    pub fn from_config(mut config: GatewayConfig) -> Self {
        let chatkit = config
            .openai_api_key
            .take()
            .map(|key| Arc::new(ChatKitClient::new(key, config.chatkit_base_url.clone())));

        let sink = config
            .slack_webhook_url
            .clone()
            .map(|url| Arc::new(WebhookSink::new(url)));

        Self {
            config: Arc::new(config),
            chatkit,
            sink,
        }
    }
}
