//! Reset token consumption

use std::sync::Arc;

use crate::domain::entities::ResetPayload;
use crate::errors::TokenError;
use crate::services::token::{Clock, TokenCodec};

/// Checks reset tokens before a password change
#[derive(Clone)]
pub struct ResetConsumer {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
}

impl ResetConsumer {
    pub fn new(codec: TokenCodec, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Return the email a valid, unexpired reset token authorizes
    pub fn authorize_reset(&self, reset_token: &str) -> Result<String, TokenError> {
        let payload: ResetPayload = self.codec.verify_unexpired(reset_token, self.clock.now())?;
        Ok(payload.email)
    }
}
