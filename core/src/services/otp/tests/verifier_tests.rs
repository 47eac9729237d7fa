//! Unit tests for OTP verification and reset authorization

use crate::domain::entities::{ResetPayload, OTP_TTL_SECONDS, RESET_TTL_SECONDS};
use crate::errors::TokenError;
use crate::services::otp::{OtpIssuer, OtpVerifier, ResetConsumer};
use crate::services::token::TokenCodec;

use super::{clock, codec, NOW};

#[test]
fn test_correct_code_promotes_to_reset_token() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock.clone());
    let consumer = ResetConsumer::new(codec(), clock);

    let issued = issuer.issue("a@x.com").unwrap();
    let reset_token = verifier.verify_and_promote(&issued.token, &issued.code).unwrap();

    let payload: ResetPayload = codec().verify(&reset_token).unwrap();
    assert_eq!(payload, ResetPayload::new("a@x.com", NOW));
    assert_eq!(consumer.authorize_reset(&reset_token).unwrap(), "a@x.com");
}

#[test]
fn test_mixed_case_email_flows_through_lower_cased() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock.clone());
    let consumer = ResetConsumer::new(codec(), clock);

    let token = issuer.issue_with_code("Alice@Example.COM", "482913").unwrap();
    let reset_token = verifier.verify_and_promote(&token, "482913").unwrap();

    assert_eq!(
        consumer.authorize_reset(&reset_token).unwrap(),
        "alice@example.com"
    );
}

#[test]
fn test_wrong_code_is_a_mismatch() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock);

    let token = issuer.issue_with_code("a@x.com", "123456").unwrap();
    assert_eq!(
        verifier.verify_and_promote(&token, "000000").unwrap_err(),
        TokenError::CodeMismatch
    );
    assert_eq!(
        verifier.verify_and_promote(&token, "12345").unwrap_err(),
        TokenError::CodeMismatch
    );
    assert_eq!(
        verifier.verify_and_promote(&token, "").unwrap_err(),
        TokenError::CodeMismatch
    );
}

#[test]
fn test_otp_can_be_promoted_twice() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock.clone());
    let consumer = ResetConsumer::new(codec(), clock.clone());

    let issued = issuer.issue("a@x.com").unwrap();
    let first = verifier.verify_and_promote(&issued.token, &issued.code).unwrap();
    clock.advance(1);
    let second = verifier.verify_and_promote(&issued.token, &issued.code).unwrap();

    assert_ne!(first, second);
    assert_eq!(consumer.authorize_reset(&first).unwrap(), "a@x.com");
    assert_eq!(consumer.authorize_reset(&second).unwrap(), "a@x.com");
}

#[test]
fn test_otp_expiry_boundary() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock.clone());

    let token = issuer.issue_with_code("a@x.com", "123456").unwrap();

    clock.set(NOW + OTP_TTL_SECONDS);
    assert!(verifier.verify_and_promote(&token, "123456").is_ok());

    clock.set(NOW + OTP_TTL_SECONDS + 1);
    assert_eq!(
        verifier.verify_and_promote(&token, "123456").unwrap_err(),
        TokenError::Expired
    );
}

#[test]
fn test_expiry_checked_before_code() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock.clone());

    let token = issuer.issue_with_code("a@x.com", "123456").unwrap();
    clock.advance(OTP_TTL_SECONDS + 1);

    assert_eq!(
        verifier.verify_and_promote(&token, "000000").unwrap_err(),
        TokenError::Expired
    );
}

#[test]
fn test_foreign_otp_token_is_rejected() {
    let clock = clock();
    let foreign = OtpIssuer::new(TokenCodec::new("other-secret").unwrap(), clock.clone());
    let verifier = OtpVerifier::new(codec(), clock);

    let token = foreign.issue_with_code("a@x.com", "123456").unwrap();
    assert_eq!(
        verifier.verify_and_promote(&token, "123456").unwrap_err(),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_reset_token_expiry_boundary() {
    let clock = clock();
    let consumer = ResetConsumer::new(codec(), clock.clone());
    let reset_token = codec().sign(&ResetPayload::new("a@x.com", NOW)).unwrap();

    clock.set(NOW + RESET_TTL_SECONDS);
    assert!(consumer.authorize_reset(&reset_token).is_ok());

    clock.set(NOW + RESET_TTL_SECONDS + 1);
    assert_eq!(
        consumer.authorize_reset(&reset_token).unwrap_err(),
        TokenError::Expired
    );
}

#[test]
fn test_otp_token_is_not_a_reset_token() {
    let clock = clock();
    let issuer = OtpIssuer::new(codec(), clock.clone());
    let consumer = ResetConsumer::new(codec(), clock);

    let issued = issuer.issue("a@x.com").unwrap();
    assert_eq!(
        consumer.authorize_reset(&issued.token).unwrap_err(),
        TokenError::MalformedToken
    );
}

#[test]
fn test_reset_token_is_not_an_otp_token() {
    let clock = clock();
    let verifier = OtpVerifier::new(codec(), clock);
    let reset_token = codec().sign(&ResetPayload::new("a@x.com", NOW)).unwrap();

    assert_eq!(
        verifier.verify_and_promote(&reset_token, "123456").unwrap_err(),
        TokenError::MalformedToken
    );
}
