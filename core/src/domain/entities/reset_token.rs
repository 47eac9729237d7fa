//! Payloads carried inside signed OTP and reset tokens.
//!
//! Neither payload is ever stored: both live only inside the token string.
//! Field declaration order is the serialization order, so the JSON produced
//! for a given payload is byte-for-byte deterministic.

use serde::{Deserialize, Serialize};

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Lifetime of an OTP token (10 minutes)
pub const OTP_TTL_SECONDS: i64 = 10 * 60;

/// Lifetime of a reset token (15 minutes)
pub const RESET_TTL_SECONDS: i64 = 15 * 60;

/// Payloads that carry an absolute expiry in unix seconds
pub trait Expiring {
    /// Expiry in unix seconds
    fn exp(&self) -> i64;

    /// A payload is expired once the clock is strictly past `exp`
    fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp()
    }
}

/// Payload of the token handed out when a reset code is requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpPayload {
    /// Canonical (trimmed, lower-cased) email address
    pub email: String,
    /// The 6-digit one-time code
    pub code: String,
    /// Expiry in unix seconds
    pub exp: i64,
}

impl OtpPayload {
    /// Creates a payload expiring `OTP_TTL_SECONDS` after `issued_at`
    pub fn new(email: impl Into<String>, code: impl Into<String>, issued_at: i64) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            exp: issued_at + OTP_TTL_SECONDS,
        }
    }
}

impl Expiring for OtpPayload {
    fn exp(&self) -> i64 {
        self.exp
    }
}

/// Payload of the token that authorizes a single password change
///
/// Unknown fields are refused so an OTP token, which carries an extra `code`,
/// never decodes as a reset authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResetPayload {
    /// Canonical (lower-cased) email address that passed OTP verification
    pub email: String,
    /// Expiry in unix seconds
    pub exp: i64,
}

impl ResetPayload {
    /// Creates a payload expiring `RESET_TTL_SECONDS` after `issued_at`
    pub fn new(email: impl Into<String>, issued_at: i64) -> Self {
        Self {
            email: email.into(),
            exp: issued_at + RESET_TTL_SECONDS,
        }
    }
}

impl Expiring for ResetPayload {
    fn exp(&self) -> i64 {
        self.exp
    }
}

/// Result of issuing a one-time code
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    /// The code to deliver to the user out of band
    pub code: String,
    /// The signed token to hand back to the client
    pub token: String,
    /// Expiry in unix seconds
    pub expires_at: i64,
}
