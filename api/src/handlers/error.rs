//! Mapping of domain and request errors to HTTP responses
//!
//! Every error body has the shape `{error, message, timestamp}`. Internal
//! details are logged, never returned.

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use wander_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use wander_shared::ErrorResponse;

const INVALID_OR_EXPIRED: &str = "Invalid or expired code";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::ValidationErr(validation) => {
            let code = match &validation {
                ValidationError::RequiredField { .. } => "missing_field",
                ValidationError::InvalidEmail => "invalid_email",
                ValidationError::PasswordTooShort { .. } => "password_too_short",
            };
            HttpResponse::BadRequest().json(ErrorResponse::new(code, validation_message(&validation)))
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidOrExpiredToken => HttpResponse::BadRequest()
                .json(ErrorResponse::new("invalid_or_expired", INVALID_OR_EXPIRED)),
            AuthError::UserNotFound => {
                HttpResponse::NotFound().json(ErrorResponse::new("user_not_found", "User not found"))
            }
            AuthError::EmailServiceFailure => HttpResponse::ServiceUnavailable().json(
                ErrorResponse::new(
                    "email_service_failure",
                    "Email service is temporarily unavailable. Please try again later",
                ),
            ),
            AuthError::DirectoryFailure { message } => {
                tracing::error!(error = %message, "User directory failure");
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("directory_failure", "Failed to reset password"))
            }
        },
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::NotFound { resource } => {
            tracing::warn!(resource = %resource, "Resource not found");
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "Resource not found"))
        }
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            internal_error()
        }
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    if error.is_rejection() {
        HttpResponse::BadRequest().json(ErrorResponse::new("invalid_or_expired", INVALID_OR_EXPIRED))
    } else {
        tracing::error!(error = %error, "Token processing failed");
        internal_error()
    }
}

fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::RequiredField { field } => format!("{} is required", field),
        other => other.to_string(),
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ErrorResponse::new("internal_error", "An internal error occurred"))
}

/// Convert `validator` failures on a request body into a 400 response
///
/// The first message found is used; field-level errors are attached as
/// details.
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect();
    messages.sort();
    let message = messages
        .into_iter()
        .next()
        .unwrap_or_else(|| "Invalid request".to_string());

    let fields: Vec<&str> = {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        fields
    };

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", message)
            .with_detail("fields", serde_json::json!(fields)),
    )
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new("invalid_request", "Request body must be valid JSON"));
    actix_web::error::InternalError::from_response(err, response).into()
}
