//! Business logic for Chatgate.
//!
//! Pure functions only: cookie-based visitor identity, workflow-reference
//! resolution, and handoff validation/formatting. Network I/O lives in
//! `chatgate-infra`; HTTP handling lives in `chatgate-api`.

pub mod handoff;
pub mod identity;
pub mod workflow;
