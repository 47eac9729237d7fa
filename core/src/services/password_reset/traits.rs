//! Traits for email delivery integration

use async_trait::async_trait;

use crate::domain::entities::EmailMessage;

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Deliver a message, returning the provider's message id
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String>;
}
