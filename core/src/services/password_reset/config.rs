//! Configuration for the password reset service

use wander_shared::ResetConfig;

/// Configuration for the password reset service
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Minimum number of characters a new password must have
    pub min_password_length: usize,
    /// Product name used in the reset email
    pub product_name: String,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self::from(&ResetConfig::default())
    }
}

impl From<&ResetConfig> for PasswordResetConfig {
    fn from(config: &ResetConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
            product_name: config.product_name.clone(),
        }
    }
}
