//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the password reset flow
//! depends on:
//! - **Email**: mock sender for development and an HTTP relay sender
//! - **Directory**: in-memory account store and the Supabase admin API

// Re-export core types for convenience
pub use wander_core::errors::*;

/// Email delivery module
pub mod email;

/// User directory module
pub mod directory;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),

    /// User directory error
    #[error("Directory error: {0}")]
    Directory(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => DomainError::Internal { message },
            InfrastructureError::Email(_) => AuthError::EmailServiceFailure.into(),
            other => AuthError::DirectoryFailure {
                message: other.to_string(),
            }
            .into(),
        }
    }
}
