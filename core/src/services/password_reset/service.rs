//! Main password reset service implementation

use std::sync::Arc;

use wander_shared::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::EmailMessage;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::UserDirectory;
use crate::services::otp::{OtpIssuer, OtpVerifier, ResetConsumer};
use crate::services::token::{Clock, TokenCodec};

use super::config::PasswordResetConfig;
use super::traits::EmailServiceTrait;
use super::types::SendCodeResult;

/// Service type used behind trait objects by the HTTP layer
pub type DynPasswordResetService = PasswordResetService<dyn EmailServiceTrait, dyn UserDirectory>;

/// Password reset service driving the code, verify and reset steps
pub struct PasswordResetService<E: EmailServiceTrait + ?Sized, D: UserDirectory + ?Sized> {
    /// Email sender for codes and relayed messages
    email_service: Arc<E>,
    /// External account store
    directory: Arc<D>,
    issuer: OtpIssuer,
    verifier: OtpVerifier,
    consumer: ResetConsumer,
    /// Service configuration
    config: PasswordResetConfig,
}

impl<E, D> PasswordResetService<E, D>
where
    E: EmailServiceTrait + ?Sized,
    D: UserDirectory + ?Sized,
{
    /// Create a new password reset service
    ///
    /// # Arguments
    ///
    /// * `email_service` - Email sender implementation
    /// * `directory` - User directory implementation
    /// * `codec` - Token codec holding the signing secret
    /// * `clock` - Time source for token expiry
    /// * `config` - Service configuration
    pub fn new(
        email_service: Arc<E>,
        directory: Arc<D>,
        codec: TokenCodec,
        clock: Arc<dyn Clock>,
        config: PasswordResetConfig,
    ) -> Self {
        Self {
            email_service,
            directory,
            issuer: OtpIssuer::new(codec.clone(), clock.clone()),
            verifier: OtpVerifier::new(codec.clone(), clock.clone()),
            consumer: ResetConsumer::new(codec, clock),
            config,
        }
    }

    /// Issue a reset code for `email` and deliver it by email
    ///
    /// The directory is never consulted here, so the response is the same
    /// whether or not an account exists for the address.
    pub async fn send_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        if email.trim().is_empty() {
            return Err(required("email"));
        }
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let issued = self.issuer.issue(&email).map_err(|e| {
            tracing::error!(error = %e, event = "otp_issue_failed", "Failed to issue reset code");
            DomainError::Internal {
                message: "Failed to issue reset code".to_string(),
            }
        })?;

        tracing::info!(
            email = %mask_email(&email),
            expires_at = issued.expires_at,
            event = "otp_issued",
            "Issued password reset code"
        );

        let message = EmailMessage::password_reset_code(&email, &issued.code, &self.config.product_name);
        let message_id = self.email_service.send_email(&message).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "otp_delivery_failed",
                "Failed to deliver password reset code"
            );
            DomainError::from(AuthError::EmailServiceFailure)
        })?;

        Ok(SendCodeResult {
            otp_token: issued.token,
            expires_at: issued.expires_at,
            message_id,
        })
    }

    /// Check a submitted code and return a reset token on success
    pub async fn verify_code(&self, otp_token: &str, code: &str) -> DomainResult<String> {
        if otp_token.is_empty() {
            return Err(required("otpToken"));
        }
        if code.is_empty() {
            return Err(required("code"));
        }

        let reset_token = self
            .verifier
            .verify_and_promote(otp_token, code)
            .map_err(|e| rejected("otp_verification_failed", e))?;

        tracing::info!(event = "otp_verified", "Reset code verified");
        Ok(reset_token)
    }

    /// Change the password of the account a reset token was issued for
    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> DomainResult<()> {
        if reset_token.is_empty() {
            return Err(required("resetToken"));
        }
        if new_password.is_empty() {
            return Err(required("newPassword"));
        }
        let min = self.config.min_password_length;
        if new_password.chars().count() < min {
            return Err(ValidationError::PasswordTooShort { min }.into());
        }

        let email = self
            .consumer
            .authorize_reset(reset_token)
            .map_err(|e| rejected("reset_token_rejected", e))?;

        let account = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "reset_account_missing",
                    "No account for verified email"
                );
                DomainError::from(AuthError::UserNotFound)
            })?;

        self.directory.update_password(&account.id, new_password).await?;

        tracing::info!(
            email = %mask_email(&email),
            account_id = %account.id,
            event = "password_reset",
            "Password updated"
        );
        Ok(())
    }

    /// Relay an arbitrary message through the email sender
    pub async fn send_email(&self, message: &EmailMessage) -> DomainResult<String> {
        message.validate()?;

        self.email_service.send_email(message).await.map_err(|e| {
            tracing::error!(
                to = %mask_email(&message.to),
                error = %e,
                event = "email_send_failed",
                "Failed to send email"
            );
            DomainError::from(AuthError::EmailServiceFailure)
        })
    }
}

fn required(field: &str) -> DomainError {
    ValidationError::RequiredField {
        field: field.to_string(),
    }
    .into()
}

/// Collapse every token failure into one outward error, keeping the reason in logs
fn rejected(event: &'static str, reason: TokenError) -> DomainError {
    if reason.is_rejection() {
        tracing::debug!(event, reason = %reason, "Token rejected");
    } else {
        tracing::error!(event, reason = %reason, "Token processing failed");
    }
    AuthError::InvalidOrExpiredToken.into()
}
