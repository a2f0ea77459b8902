//! Shared domain types for Chatgate.
//!
//! This crate contains the core domain types used across the gateway:
//! session requests and credentials, handoff events, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod error;
pub mod handoff;
pub mod session;
