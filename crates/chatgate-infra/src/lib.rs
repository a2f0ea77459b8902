//! Infrastructure layer for Chatgate.
//!
//! Contains the outbound HTTP collaborators -- the ChatKit session client
//! and the webhook notification sink -- plus the environment-based
//! configuration loader.

pub mod chatkit;
pub mod config;
pub mod sink;
