//! Request and response bodies for the generic email relay endpoint

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use wander_core::domain::EmailMessage;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_has_body", skip_on_field_errors = false))]
pub struct SendEmailRequest {
    #[validate(length(min = 1, message = "Missing required fields: to, subject, and html or text"))]
    pub to: String,

    #[validate(length(min = 1, message = "Missing required fields: to, subject, and html or text"))]
    pub subject: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fn validate_has_body(request: &SendEmailRequest) -> Result<(), ValidationError> {
    let present = |body: &Option<String>| body.as_deref().map(|b| !b.is_empty()).unwrap_or(false);
    if present(&request.html) || present(&request.text) {
        return Ok(());
    }
    let mut error = ValidationError::new("body_required");
    error.message = Some("Missing required fields: to, subject, and html or text".into());
    Err(error)
}

impl From<SendEmailRequest> for EmailMessage {
    fn from(request: SendEmailRequest) -> Self {
        EmailMessage {
            to: request.to,
            subject: request.subject,
            html: request.html,
            text: request.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub success: bool,
    pub message_id: String,
}
