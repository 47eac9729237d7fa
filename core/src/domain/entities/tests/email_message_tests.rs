//! Tests for outgoing email messages

use crate::domain::entities::email_message::EmailMessage;
use crate::errors::ValidationError;

#[test]
fn test_password_reset_email_contains_code() {
    let message = EmailMessage::password_reset_code("user@example.com", "482913", "Wander");

    assert_eq!(message.to, "user@example.com");
    assert_eq!(message.subject, "Your password reset code");
    assert!(message.html.as_deref().unwrap().contains("482913"));
    assert!(message.html.as_deref().unwrap().contains("10 minutes"));
    assert!(message.text.as_deref().unwrap().contains("482913"));
    assert!(message.validate().is_ok());
}

#[test]
fn test_message_requires_a_body() {
    let message = EmailMessage {
        to: "user@example.com".to_string(),
        subject: "Hello".to_string(),
        html: None,
        text: Some(String::new()),
    };
    assert!(matches!(
        message.validate(),
        Err(ValidationError::RequiredField { field }) if field == "html or text"
    ));
}

#[test]
fn test_message_requires_recipient_and_subject() {
    let mut message = EmailMessage {
        to: " ".to_string(),
        subject: "Hello".to_string(),
        html: Some("<p>Hi</p>".to_string()),
        text: None,
    };
    assert!(matches!(
        message.validate(),
        Err(ValidationError::RequiredField { field }) if field == "to"
    ));

    message.to = "user@example.com".to_string();
    message.subject = String::new();
    assert!(matches!(
        message.validate(),
        Err(ValidationError::RequiredField { field }) if field == "subject"
    ));
}
