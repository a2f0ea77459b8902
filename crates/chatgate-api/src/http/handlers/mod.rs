//! HTTP request handlers for the gateway endpoints.

pub mod handoff;
pub mod session;
