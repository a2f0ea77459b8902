//! Handoff validation, ticket ids, and notification formatting.
//!
//! A validated [`HandoffEvent`] becomes a single multi-line text message
//! with a fixed field order. Optional fields absent at submission time are
//! rendered with placeholders rather than omitting the line, so the
//! notification always has the same shape.

use rand::Rng;
use rand::distr::Alphanumeric;

use chatgate_types::error::GatewayError;
use chatgate_types::handoff::HandoffEvent;

/// Length of the correlation ticket id.
pub const TICKET_ID_LEN: usize = 8;

const PLACEHOLDER_SHORT: &str = "N/A";
const PLACEHOLDER_MESSAGE: &str = "_No message provided_";
const PLACEHOLDER_TRANSCRIPT: &str = "_No transcript provided_";

/// Check that the required contact fields are present and non-empty.
///
/// Must run before any network call so an incomplete submission never
/// reaches the notification sink.
pub fn validate(event: &HandoffEvent) -> Result<(), GatewayError> {
    if event.name.is_empty() || event.email.is_empty() {
        return Err(GatewayError::Validation(
            "Missing required fields: name and email".to_string(),
        ));
    }
    Ok(())
}

/// Generate a short human-shareable correlation ticket id.
///
/// Eight uppercase alphanumerics from a random source. Not checked for
/// uniqueness against concurrent requests; collisions are possible and
/// acceptable since the id is purely a correlation aid.
pub fn generate_ticket_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(TICKET_ID_LEN)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

/// Format the outbound notification text for a handoff event.
///
/// Fixed field order: label + ticket header, name, email, phone, company,
/// message, transcript. Absent optionals get placeholder lines.
pub fn format_notification(event: &HandoffEvent, ticket_id: &str) -> String {
    let label = event.kind.label();
    let phone = or_placeholder(&event.phone, PLACEHOLDER_SHORT);
    let company = or_placeholder(&event.company, PLACEHOLDER_SHORT);
    let message = or_placeholder(&event.message, PLACEHOLDER_MESSAGE);
    let transcript = or_placeholder(&event.transcript, PLACEHOLDER_TRANSCRIPT);

    format!(
        "{label} (#{ticket_id})\n\
         \n\
         *Name:* {name}\n\
         *Email:* {email}\n\
         *Phone:* {phone}\n\
         *Company:* {company}\n\
         \n\
         *Message:*\n\
         {message}\n\
         \n\
         *Transcript (context):*\n\
         {transcript}",
        name = event.name,
        email = event.email,
    )
}

/// Treat absent and empty values alike: both get the placeholder.
fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatgate_types::handoff::HandoffKind;

    fn event(kind: HandoffKind) -> HandoffEvent {
        HandoffEvent {
            kind,
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_complete_event() {
        assert!(validate(&event(HandoffKind::HumanHandoff)).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_name_or_email() {
        let mut missing_name = event(HandoffKind::HumanHandoff);
        missing_name.name.clear();
        assert!(matches!(
            validate(&missing_name),
            Err(GatewayError::Validation(_))
        ));

        let mut missing_email = event(HandoffKind::HumanHandoff);
        missing_email.email.clear();
        assert!(matches!(
            validate(&missing_email),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn test_ticket_id_is_fixed_length_uppercase_alphanumeric() {
        for _ in 0..100 {
            let ticket = generate_ticket_id();
            assert_eq!(ticket.len(), TICKET_ID_LEN);
            assert!(
                ticket
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "unexpected ticket id: {ticket}"
            );
        }
    }

    #[test]
    fn test_format_uses_placeholders_for_absent_optionals() {
        let text = format_notification(&event(HandoffKind::HumanHandoff), "ABCD1234");
        assert!(text.contains("(#ABCD1234)"));
        assert!(text.contains("*Name:* Jane Doe"));
        assert!(text.contains("*Email:* jane@x.com"));
        assert!(text.contains("*Phone:* N/A"));
        assert!(text.contains("*Company:* N/A"));
        assert!(text.contains("_No message provided_"));
        assert!(text.contains("_No transcript provided_"));
    }

    #[test]
    fn test_format_includes_populated_optionals() {
        let mut full = event(HandoffKind::ProgressiveProfile);
        full.phone = Some("+1 555 0100".to_string());
        full.company = Some("Acme".to_string());
        full.message = Some("Please call me back".to_string());
        full.transcript = Some("user: hi\nbot: hello".to_string());

        let text = format_notification(&full, "ZZZZ9999");
        assert!(text.starts_with(HandoffKind::ProgressiveProfile.label()));
        assert!(text.contains("*Phone:* +1 555 0100"));
        assert!(text.contains("*Company:* Acme"));
        assert!(text.contains("Please call me back"));
        assert!(text.contains("user: hi\nbot: hello"));
    }

    #[test]
    fn test_empty_optional_gets_placeholder() {
        let mut e = event(HandoffKind::HumanHandoff);
        e.phone = Some(String::new());
        let text = format_notification(&e, "AAAA0000");
        assert!(text.contains("*Phone:* N/A"));
    }

    #[test]
    fn test_field_order_is_fixed() {
        let text = format_notification(&event(HandoffKind::HumanHandoff), "AAAA0000");
        let name = text.find("*Name:*").unwrap();
        let email = text.find("*Email:*").unwrap();
        let phone = text.find("*Phone:*").unwrap();
        let company = text.find("*Company:*").unwrap();
        let message = text.find("*Message:*").unwrap();
        let transcript = text.find("*Transcript (context):*").unwrap();
        assert!(name < email && email < phone && phone < company);
        assert!(company < message && message < transcript);
    }
}
