//! Handoff event types.
//!
//! A handoff is a visitor-submitted record: either a request to escalate the
//! chat to a human, or contact details captured progressively during the
//! conversation. Events are validated, turned into a notification, and
//! discarded -- never persisted.

use serde::Deserialize;

/// Kind of handoff event. A closed two-way set; values the widget sends
/// that we do not recognize degrade to the human-handoff label rather than
/// failing validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffKind {
    ProgressiveProfile,
    HumanHandoff,
    #[serde(other)]
    Unknown,
}

impl HandoffKind {
    /// Human-readable label used in the notification header.
    pub fn label(&self) -> &'static str {
        match self {
            HandoffKind::ProgressiveProfile => "\u{1F7E3} Progressive Profile",
            HandoffKind::HumanHandoff | HandoffKind::Unknown => "\u{1F7E2} Human Handoff",
        }
    }
}

impl Default for HandoffKind {
    fn default() -> Self {
        HandoffKind::Unknown
    }
}

/// A visitor-submitted handoff record.
///
/// `name` and `email` are required (enforced by validation, not
/// deserialization, so an incomplete body yields a 400 rather than a parse
/// failure). Optional fields absent at submission time are rendered with
/// placeholders in the notification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandoffEvent {
    #[serde(default, rename = "type")]
    pub kind: HandoffKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}
