//! Axum router configuration with middleware.
//!
//! Two API routes plus a health check. CORS is wide open: the widget is
//! embedded on arbitrary customer pages and carries no credentials beyond
//! the continuity cookie it manages itself.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/create-session", post(handlers::session::create_session))
        .route(
            "/api/handoff",
            post(handlers::handoff::relay_handoff)
                .fallback(handlers::handoff::method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
