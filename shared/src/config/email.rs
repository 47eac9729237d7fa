//! Email delivery configuration

use serde::{Deserialize, Serialize};

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("mock" or "relay")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// HTTP endpoint of the email relay
    #[serde(default)]
    pub relay_url: Option<String>,

    /// API key sent as a bearer token to the relay
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    #[serde(default = "default_from")]
    pub from: String,

    /// Timeout for relay requests in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            relay_url: None,
            api_key: None,
            from: default_from(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl EmailConfig {
    /// Fill unset values from the dashboard's conventional variables
    pub fn apply_env(&mut self) {
        if self.relay_url.is_none() {
            self.relay_url = std::env::var("EMAIL_RELAY_URL").ok();
            if self.relay_url.is_some() && self.provider == default_provider() {
                self.provider = String::from("relay");
            }
        }
        if self.api_key.is_none() {
            self.api_key = std::env::var("EMAIL_RELAY_API_KEY").ok();
        }
        if let Ok(from) = std::env::var("SMTP_FROM") {
            if !from.trim().is_empty() {
                self.from = from;
            }
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_from() -> String {
    String::from("Wander <no-reply@wander.blog>")
}

fn default_timeout() -> u64 {
    30
}
