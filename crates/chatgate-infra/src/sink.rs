//! Webhook notification sink -- delivers handoff notifications.
//!
//! Single `POST {url}` with a `{"text": ...}` JSON body, Slack
//! incoming-webhook style. No authentication beyond URL secrecy, no retry.
//! The sink's response body is logged server-side but never surfaced to
//! the caller.

use std::time::Duration;

use serde_json::json;

use chatgate_types::error::GatewayError;

/// Client for the team-notification webhook.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    /// Create a new sink for the given webhook URL.
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self { client, url }
    }

    /// Deliver one formatted notification text.
    pub async fn deliver(&self, text: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| GatewayError::Unexpected(format!("sink request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "notification sink rejected delivery");
            return Err(GatewayError::Delivery(format!("sink returned HTTP {status}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;

    async fn spawn_mock(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_deliver_posts_text_body() {
        let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let captured_clone = Arc::clone(&captured);

        let router = Router::new().route(
            "/webhook",
            post(move |Json(body): Json<Value>| {
                let captured = Arc::clone(&captured_clone);
                async move {
                    *captured.lock().unwrap() = Some(body);
                    "ok"
                }
            }),
        );
        let addr = spawn_mock(router).await;

        let sink = WebhookSink::new(format!("http://{addr}/webhook"));
        sink.deliver("hello team").await.unwrap();

        let body = captured.lock().unwrap().take().unwrap();
        assert_eq!(body, json!({"text": "hello team"}));
    }

    #[tokio::test]
    async fn test_non_success_is_delivery_error() {
        let router = Router::new().route(
            "/webhook",
            post(|| async { (axum::http::StatusCode::FORBIDDEN, "invalid_token") }),
        );
        let addr = spawn_mock(router).await;

        let sink = WebhookSink::new(format!("http://{addr}/webhook"));
        let err = sink.deliver("hello team").await.unwrap_err();
        assert!(matches!(err, GatewayError::Delivery(_)));
    }

    #[tokio::test]
    async fn test_no_retry_on_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let router = Router::new().route(
            "/webhook",
            post(move || {
                let calls = Arc::clone(&calls_clone);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR
                }
            }),
        );
        let addr = spawn_mock(router).await;

        let sink = WebhookSink::new(format!("http://{addr}/webhook"));
        let _ = sink.deliver("hello team").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_network_failure_is_unexpected_error() {
        let sink = WebhookSink::new("http://127.0.0.1:9/webhook".to_string());
        let err = sink.deliver("hello team").await.unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected(_)));
    }
}
