//! # Wander API
//!
//! HTTP surface of the dashboard backend: the stateless password reset flow
//! and a generic email relay.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use wander_core::services::{PasswordResetConfig, PasswordResetService, SystemClock, TokenCodec};
use wander_infra::{directory::create_user_directory, email::create_email_service};
use wander_shared::{AppConfig, ConfigError};

pub use app::{configure_routes, create_app};
pub use state::AppState;

/// Wire the password reset service from configuration
///
/// Fails when the signing secret is missing or a provider cannot be built.
pub fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let secret = config.reset.secret().ok_or(ConfigError::MissingSecret)?;
    let codec = TokenCodec::new(secret)?;

    let email_service = create_email_service(&config.email)?;
    let directory = create_user_directory(&config.directory)?;

    let reset_service = PasswordResetService::new(
        email_service,
        directory,
        codec,
        Arc::new(SystemClock),
        PasswordResetConfig::from(&config.reset),
    );

    Ok(AppState::new(Arc::new(reset_service), config.environment))
}
