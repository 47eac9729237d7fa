//! Outgoing email message entity.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// An email handed to the email sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl EmailMessage {
    /// Builds the password reset email carrying a one-time code
    pub fn password_reset_code(to: &str, code: &str, product_name: &str) -> Self {
        let html = format!(
            r#"<div style="font-family: sans-serif; max-width: 400px; margin: auto;">
  <h2>Password Reset</h2>
  <p>Use the code below to reset your {product} password. It expires in <strong>10 minutes</strong>.</p>
  <div style="font-size: 36px; font-weight: bold; letter-spacing: 8px; text-align: center; padding: 20px; background: #f4f4f4; border-radius: 8px;">{code}</div>
  <p style="color: #888; font-size: 12px; margin-top: 16px;">If you didn't request this, you can safely ignore this email.</p>
</div>"#,
            product = product_name,
            code = code,
        );
        let text = format!(
            "Your {} password reset code is {}. It expires in 10 minutes.\n\nIf you didn't request this, you can safely ignore this email.",
            product_name, code
        );

        Self {
            to: to.to_string(),
            subject: "Your password reset code".to_string(),
            html: Some(html),
            text: Some(text),
        }
    }

    /// A message needs a recipient, a subject and at least one body
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.to.trim().is_empty() {
            return Err(ValidationError::RequiredField { field: "to".to_string() });
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::RequiredField { field: "subject".to_string() });
        }
        let has_body = [&self.html, &self.text]
            .iter()
            .any(|body| body.as_deref().map(|b| !b.is_empty()).unwrap_or(false));
        if !has_body {
            return Err(ValidationError::RequiredField { field: "html or text".to_string() });
        }
        Ok(())
    }
}
