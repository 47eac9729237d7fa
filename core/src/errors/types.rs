//! Domain-specific error types for the password reset flow
//!
//! `TokenError` keeps the precise reason a token was refused so it can be
//! logged. Callers outside the core never see it: the reset service collapses
//! every token failure into `AuthError::InvalidOrExpiredToken`.

use thiserror::Error;

/// Authentication-related errors surfaced to API callers
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid or expired code")]
    InvalidOrExpiredToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Email service failure")]
    EmailServiceFailure,

    #[error("User directory failure: {message}")]
    DirectoryFailure { message: String },
}

/// Signed token errors, in the order the checks run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("One-time code does not match")]
    CodeMismatch,

    #[error("Token signing secret is missing")]
    MissingSecret,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Whether the error describes a refused token rather than a local fault
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::MalformedToken
                | TokenError::InvalidSignature
                | TokenError::Expired
                | TokenError::CodeMismatch
        )
    }
}

/// Request validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}
