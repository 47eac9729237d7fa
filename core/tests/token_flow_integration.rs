//! Integration tests for the stateless OTP / reset token flow

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    use wander_core::domain::{ResetPayload, OTP_TTL_SECONDS, RESET_TTL_SECONDS};
    use wander_core::errors::TokenError;
    use wander_core::services::{
        Clock, FixedClock, OtpIssuer, OtpVerifier, ResetConsumer, TokenCodec,
    };

    const T0: i64 = 1_700_000_000;

    struct Flow {
        clock: Arc<FixedClock>,
        issuer: OtpIssuer,
        verifier: OtpVerifier,
        consumer: ResetConsumer,
    }

    fn flow(secret: &str) -> Flow {
        let clock = Arc::new(FixedClock::new(T0));
        let codec = TokenCodec::new(secret).unwrap();
        let shared: Arc<dyn Clock> = clock.clone();
        Flow {
            issuer: OtpIssuer::new(codec.clone(), shared.clone()),
            verifier: OtpVerifier::new(codec.clone(), shared.clone()),
            consumer: ResetConsumer::new(codec, shared),
            clock,
        }
    }

    #[test]
    fn test_mixed_case_email_reaches_reset_lower_cased() {
        let f = flow("k");

        let token = f.issuer.issue_with_code("Alice@Example.COM", "482913").unwrap();
        f.clock.advance(30);
        let reset = f.verifier.verify_and_promote(&token, "482913").unwrap();

        assert_eq!(f.consumer.authorize_reset(&reset).unwrap(), "alice@example.com");
    }

    #[test]
    fn test_wrong_code_never_promotes() {
        let f = flow("k");

        let token = f.issuer.issue_with_code("a@x.com", "123456").unwrap();
        assert_eq!(
            f.verifier.verify_and_promote(&token, "000000").unwrap_err(),
            TokenError::CodeMismatch
        );
    }

    #[test]
    fn test_otp_promotes_twice_without_revocation() {
        let f = flow("k");

        let issued = f.issuer.issue("a@x.com").unwrap();
        let first = f.verifier.verify_and_promote(&issued.token, &issued.code).unwrap();
        f.clock.advance(5);
        let second = f.verifier.verify_and_promote(&issued.token, &issued.code).unwrap();

        assert_ne!(first, second);
        assert!(f.consumer.authorize_reset(&first).is_ok());
        assert!(f.consumer.authorize_reset(&second).is_ok());
    }

    #[test]
    fn test_reset_token_dies_one_second_after_expiry() {
        let f = flow("k");

        let issued = f.issuer.issue("a@x.com").unwrap();
        let reset = f.verifier.verify_and_promote(&issued.token, &issued.code).unwrap();

        f.clock.set(T0 + RESET_TTL_SECONDS + 1);
        assert_eq!(f.consumer.authorize_reset(&reset).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_otp_dies_one_second_after_expiry() {
        let f = flow("k");

        let issued = f.issuer.issue("a@x.com").unwrap();
        f.clock.set(T0 + OTP_TTL_SECONDS + 1);
        assert_eq!(
            f.verifier.verify_and_promote(&issued.token, &issued.code).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_repeated_signing_is_byte_identical() {
        let codec = TokenCodec::new("k").unwrap();
        let payload = ResetPayload::new("a@x.com", T0);

        let tokens: Vec<String> = (0..5).map(|_| codec.sign(&payload).unwrap()).collect();
        assert!(tokens.windows(2).all(|w| w[0] == w[1]));

        let (_, sig) = tokens[0].rsplit_once('.').unwrap();
        let reordered = format!(r#"{{"exp":{},"email":"a@x.com"}}"#, payload.exp);
        let forged = format!("{}.{}", URL_SAFE_NO_PAD.encode(reordered), sig);
        assert_eq!(
            codec.verify::<ResetPayload>(&forged).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_tokens_do_not_cross_secrets() {
        let a = flow("secret-a");
        let b = flow("secret-b");

        let issued = a.issuer.issue("a@x.com").unwrap();
        assert_eq!(
            b.verifier.verify_and_promote(&issued.token, &issued.code).unwrap_err(),
            TokenError::InvalidSignature
        );
    }
}
