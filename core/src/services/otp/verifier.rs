//! OTP verification

use std::sync::Arc;

use constant_time_eq::constant_time_eq;

use crate::domain::entities::{OtpPayload, ResetPayload};
use crate::errors::TokenError;
use crate::services::token::{Clock, TokenCodec};

/// Checks submitted codes and promotes OTP tokens to reset tokens
#[derive(Clone)]
pub struct OtpVerifier {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
}

impl OtpVerifier {
    pub fn new(codec: TokenCodec, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Verify `code` against the OTP token and mint a reset token for its email
    ///
    /// Checks run in order: signature and structure, expiry, code. Tokens are
    /// not consumed, so the same OTP token can be promoted more than once
    /// within its lifetime.
    pub fn verify_and_promote(&self, otp_token: &str, code: &str) -> Result<String, TokenError> {
        let now = self.clock.now();
        let payload: OtpPayload = self.codec.verify_unexpired(otp_token, now)?;

        if code.len() != payload.code.len()
            || !constant_time_eq(code.as_bytes(), payload.code.as_bytes())
        {
            return Err(TokenError::CodeMismatch);
        }

        self.codec.sign(&ResetPayload::new(payload.email, now))
    }
}
