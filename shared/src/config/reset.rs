//! Password reset token configuration

use serde::{Deserialize, Serialize};

/// Environment variables consulted for the signing secret, in order
pub const SECRET_ENV_VARS: [&str; 2] = ["RESET_TOKEN_SECRET", "SUPABASE_SERVICE_ROLE_KEY"];

/// Configuration for the stateless OTP / reset token flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResetConfig {
    /// HMAC signing secret shared by every instance of the service
    #[serde(default)]
    pub secret: Option<String>,

    /// Minimum accepted length for a new password
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Product name shown in reset emails
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            secret: None,
            min_password_length: default_min_password_length(),
            product_name: default_product_name(),
        }
    }
}

impl ResetConfig {
    /// Returns the configured secret, unmodified, if it is present and non-blank
    pub fn secret(&self) -> Option<&str> {
        self.secret
            .as_deref()
            .filter(|secret| !secret.trim().is_empty())
    }

    /// Fill a missing secret from the well-known environment variables
    pub fn apply_env(&mut self) {
        if self.secret().is_some() {
            return;
        }
        self.secret = SECRET_ENV_VARS
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty());
    }
}

fn default_min_password_length() -> usize {
    6
}

fn default_product_name() -> String {
    String::from("Wander")
}
