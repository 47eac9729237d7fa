//! Shared utilities and common types for the Wander dashboard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - API response structures
//! - Utility functions (email normalization, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, DirectoryConfig, EmailConfig, Environment,
    LoggingConfig, ResetConfig, ServerConfig,
};
pub use types::{ErrorResponse, HealthResponse};
pub use utils::email;
