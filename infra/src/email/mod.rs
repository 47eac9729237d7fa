//! Email Service Module
//!
//! Email delivery for reset codes and relayed messages. The relay sender
//! posts JSON to an HTTP email gateway; the mock sender logs messages for
//! development and tests.

pub mod mock;
pub mod relay;

pub use mock::MockEmailService;
pub use relay::RelayEmailService;


use std::sync::Arc;

use wander_core::services::EmailServiceTrait;
use wander_shared::EmailConfig;

use crate::InfrastructureError;

/// Create an email service based on configuration
///
/// `"relay"` needs a relay URL; `"mock"` needs nothing. Any other provider
/// name is refused so a typo never silently swallows reset emails.
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailServiceTrait>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => {
            tracing::warn!("Using mock email service; reset codes are only logged");
            Ok(Arc::new(MockEmailService::new()))
        }
        "relay" => Ok(Arc::new(RelayEmailService::new(config)?)),
        other => Err(InfrastructureError::Config(format!(
            "Unknown email provider '{}'",
            other
        ))),
    }
}
