//! OTP issuer

use std::sync::Arc;

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::{IssuedOtp, OtpPayload};
use crate::errors::TokenError;
use crate::services::token::{Clock, TokenCodec};

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// Mints one-time codes and the signed tokens that carry them
#[derive(Clone)]
pub struct OtpIssuer {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
}

impl OtpIssuer {
    pub fn new(codec: TokenCodec, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Draw a 6-digit code uniformly from 100000..=999999 using the OS CSPRNG
    pub fn generate_code() -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// Issue a fresh code for `email` together with its signed token
    ///
    /// The email is stored in canonical form (trimmed, lower-cased).
    pub fn issue(&self, email: &str) -> Result<IssuedOtp, TokenError> {
        let code = Self::generate_code();
        let payload = OtpPayload::new(canonical(email), code.clone(), self.clock.now());
        let token = self.codec.sign(&payload)?;

        Ok(IssuedOtp {
            code,
            token,
            expires_at: payload.exp,
        })
    }

    /// Seal a caller-chosen code, mainly for deterministic tests
    pub fn issue_with_code(&self, email: &str, code: &str) -> Result<String, TokenError> {
        let payload = OtpPayload::new(canonical(email), code, self.clock.now());
        self.codec.sign(&payload)
    }
}

fn canonical(email: &str) -> String {
    email.trim().to_lowercase()
}
