//! HMAC-SHA256 signed token codec
//!
//! Wire shape: `base64url(JSON(payload)) "." base64url(HMAC_SHA256(secret, base64url(JSON(payload))))`,
//! both segments URL-safe base64 without padding.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use serde::{de::DeserializeOwned, Serialize};
use sha2::Sha256;

use crate::domain::entities::reset_token::Expiring;
use crate::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies self-contained bearer tokens
///
/// The codec holds nothing but the signing key, so clones are cheap and any
/// number of instances sharing the same secret accept each other's tokens.
#[derive(Clone)]
pub struct TokenCodec {
    key: Arc<[u8]>,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").field("key", &"<redacted>").finish()
    }
}

impl TokenCodec {
    /// Create a codec from the process-wide secret
    ///
    /// A blank secret is refused; there is no fallback key.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            key: Arc::from(secret.as_bytes()),
        })
    }

    /// Serialize `payload` and append its signature
    pub fn sign<T: Serialize>(&self, payload: &T) -> Result<String, TokenError> {
        let json = serde_json::to_vec(payload).map_err(|_| TokenError::TokenGenerationFailed)?;
        let data = URL_SAFE_NO_PAD.encode(json);
        let sig = self
            .signature(&data)
            .ok_or(TokenError::TokenGenerationFailed)?;
        Ok(format!("{}.{}", data, sig))
    }

    /// Check the signature of `token` and decode its payload
    ///
    /// Never panics: any split, signature, base64 or JSON failure comes back
    /// as an error.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let (data, sig) = token.rsplit_once('.').ok_or(TokenError::MalformedToken)?;
        let expected = self.signature(data).ok_or(TokenError::InvalidSignature)?;

        // Length check first: constant-time comparison needs equal lengths
        if sig.len() != expected.len() || !constant_time_eq(sig.as_bytes(), expected.as_bytes()) {
            return Err(TokenError::InvalidSignature);
        }

        let json = URL_SAFE_NO_PAD
            .decode(data)
            .map_err(|_| TokenError::MalformedToken)?;
        serde_json::from_slice(&json).map_err(|_| TokenError::MalformedToken)
    }

    /// Verify the signature, then refuse the payload if it expired before `now`
    pub fn verify_unexpired<T>(&self, token: &str, now: i64) -> Result<T, TokenError>
    where
        T: DeserializeOwned + Expiring,
    {
        let payload: T = self.verify(token)?;
        if payload.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(payload)
    }

    fn signature(&self, data: &str) -> Option<String> {
        let mut mac = HmacSha256::new_from_slice(&self.key).ok()?;
        mac.update(data.as_bytes());
        Some(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}
