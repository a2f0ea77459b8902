//! HTTP layer for Chatgate.
//!
//! Axum-based endpoints for session bootstrap and handoff relay, with
//! CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
