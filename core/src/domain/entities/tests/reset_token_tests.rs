//! Tests for reset token payloads

use crate::domain::entities::account::Account;
use crate::domain::entities::reset_token::*;

#[test]
fn test_otp_payload_expiry_is_ten_minutes() {
    let payload = OtpPayload::new("user@example.com", "123456", 1_700_000_000);
    assert_eq!(payload.exp, 1_700_000_000 + 600);
    assert_eq!(payload.exp(), payload.exp);
}

#[test]
fn test_reset_payload_expiry_is_fifteen_minutes() {
    let payload = ResetPayload::new("user@example.com", 1_700_000_000);
    assert_eq!(payload.exp, 1_700_000_000 + 900);
}

#[test]
fn test_expiry_boundary() {
    let payload = ResetPayload::new("user@example.com", 1_000);
    assert!(!payload.is_expired_at(1_000 + RESET_TTL_SECONDS));
    assert!(payload.is_expired_at(1_000 + RESET_TTL_SECONDS + 1));
}

#[test]
fn test_payload_field_order_is_stable() {
    let otp = OtpPayload::new("user@example.com", "123456", 0);
    assert_eq!(
        serde_json::to_string(&otp).unwrap(),
        r#"{"email":"user@example.com","code":"123456","exp":600}"#
    );

    let reset = ResetPayload::new("user@example.com", 0);
    assert_eq!(
        serde_json::to_string(&reset).unwrap(),
        r#"{"email":"user@example.com","exp":900}"#
    );
}

#[test]
fn test_account_email_match_ignores_case() {
    let account = Account::new("id-1", "Editor@Wander.blog");
    assert!(account.has_email("editor@wander.blog"));
    assert!(!account.has_email("other@wander.blog"));

    let no_email = Account { id: "id-2".to_string(), email: None };
    assert!(!no_email.has_email("editor@wander.blog"));
}

#[test]
fn test_account_email_match_folds_non_ascii_case() {
    let account = Account::new("id-1", "Élodie@Wander.blog");
    assert!(account.has_email("élodie@wander.blog"));
    assert!(account.has_email(" ÉLODIE@WANDER.BLOG "));
    assert!(!account.has_email("elodie@wander.blog"));
}

#[test]
fn test_otp_json_is_not_a_reset_payload() {
    let otp = OtpPayload::new("user@example.com", "123456", 0);
    let json = serde_json::to_string(&otp).unwrap();

    assert!(serde_json::from_str::<ResetPayload>(&json).is_err());
}
