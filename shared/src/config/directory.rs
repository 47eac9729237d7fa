//! User directory (managed auth backend) configuration

use serde::{Deserialize, Serialize};

/// User directory configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Directory provider ("memory" or "supabase")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the managed backend
    #[serde(default)]
    pub url: Option<String>,

    /// Service role key for admin calls
    #[serde(default)]
    pub service_role_key: Option<String>,

    /// Page size used when scanning accounts by email
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Timeout for directory requests in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            url: None,
            service_role_key: None,
            per_page: default_per_page(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl DirectoryConfig {
    /// Fill unset values from the dashboard's conventional variables
    pub fn apply_env(&mut self) {
        if self.url.is_none() {
            self.url = std::env::var("SUPABASE_URL")
                .or_else(|_| std::env::var("NEXT_PUBLIC_SUPABASE_URL"))
                .ok();
            if self.url.is_some() && self.provider == default_provider() {
                self.provider = String::from("supabase");
            }
        }
        if self.service_role_key.is_none() {
            self.service_role_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok();
        }
    }
}

fn default_provider() -> String {
    String::from("memory")
}

fn default_per_page() -> u32 {
    1000
}

fn default_timeout() -> u64 {
    30
}
