//! Configuration module with business-specific sub-modules
//!
//! - `directory` - Managed user directory (auth backend) access
//! - `email` - Email relay delivery
//! - `environment` - Environment detection and logging configuration
//! - `reset` - Signing secret and password rules for the reset flow
//! - `server` - HTTP server and CORS configuration
//!
//! [`AppConfig::load`] layers, in order: built-in defaults, an optional
//! `config.<environment>.toml` file, `WANDER__SECTION__KEY` environment
//! variables, and finally the conventional variables the dashboard already
//! uses (`RESET_TOKEN_SECRET`, `SUPABASE_URL`, ...).

pub mod directory;
pub mod email;
pub mod environment;
pub mod reset;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use directory::DirectoryConfig;
pub use email::EmailConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use reset::ResetConfig;
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("No reset token secret configured (set RESET_TOKEN_SECRET)")]
    MissingSecret,

    #[error("Invalid configuration for {section}: {message}")]
    Invalid { section: String, message: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment, always taken from `ENVIRONMENT`
    #[serde(skip)]
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Reset token configuration
    pub reset: ResetConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// User directory configuration
    pub directory: DirectoryConfig,
}

impl AppConfig {
    /// Load and validate configuration for the current environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix("WANDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app: AppConfig = settings.try_deserialize()?;
        app.environment = environment;
        app.apply_env();
        app.validate()?;
        Ok(app)
    }

    /// Apply environment-specific defaults and conventional variables
    pub fn apply_env(&mut self) {
        if self.environment.is_development() && self.cors.allowed_origins.is_empty() {
            self.cors = CorsConfig::development();
        }
        self.reset.apply_env();
        self.email.apply_env();
        self.directory.apply_env();
    }

    /// Reject configurations the service cannot safely start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reset.secret().is_none() {
            return Err(ConfigError::MissingSecret);
        }

        match self.email.provider.as_str() {
            "mock" => {}
            "relay" if self.email.relay_url.is_some() => {}
            "relay" => return Err(invalid("email", "relay provider requires relay_url")),
            other => return Err(invalid("email", &format!("unknown provider '{}'", other))),
        }

        match self.directory.provider.as_str() {
            "memory" => {}
            "supabase" if self.directory.url.is_some() && self.directory.service_role_key.is_some() => {}
            "supabase" => {
                return Err(invalid(
                    "directory",
                    "supabase provider requires url and service_role_key",
                ))
            }
            other => return Err(invalid("directory", &format!("unknown provider '{}'", other))),
        }

        if self.directory.per_page == 0 {
            return Err(invalid("directory", "per_page must be positive"));
        }

        if self.environment.is_production() {
            if self.email.provider == "mock" {
                return Err(invalid("email", "mock provider is not allowed in production"));
            }
            if self.directory.provider == "memory" {
                return Err(invalid("directory", "memory provider is not allowed in production"));
            }
        }

        Ok(())
    }
}

fn invalid(section: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        section: section.to_string(),
        message: message.to_string(),
    }
}
