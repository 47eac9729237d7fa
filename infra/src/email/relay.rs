//! HTTP Email Relay Implementation
//!
//! Posts messages as JSON to an email gateway:
//!
//! ```text
//! POST {relay_url}
//! Authorization: Bearer {api_key}
//! {"from": "...", "to": "...", "subject": "...", "html": "...", "text": "..."}
//! ```
//!
//! The gateway answers with `{"id": "..."}` (or `messageId`); any other 2xx
//! body still counts as delivered. Rate limits and
//! server errors are retried with exponential backoff; other failures are not.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use wander_core::domain::EmailMessage;
use wander_core::services::EmailServiceTrait;
use wander_shared::email::mask_email;
use wander_shared::EmailConfig;

use crate::InfrastructureError;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u64 = 500;

/// Email service backed by an HTTP relay
#[derive(Clone)]
pub struct RelayEmailService {
    client: Client,
    relay_url: String,
    api_key: Option<String>,
    from: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RelayRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelayResponse {
    #[serde(alias = "messageId", alias = "message_id")]
    pub id: Option<String>,
}

impl RelayEmailService {
    /// Create a relay email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let relay_url = config
            .relay_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| InfrastructureError::Config("Email relay URL is not set".to_string()))?
            .to_string();

        let client = Client::builder()
            .user_agent("wander-dashboard")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(relay_url = %relay_url, from = %config.from, "Email relay service initialized");

        Ok(Self {
            client,
            relay_url,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            from: config.from.clone(),
        })
    }

    pub(crate) fn request_body<'a>(&'a self, message: &'a EmailMessage) -> RelayRequest<'a> {
        RelayRequest {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            html: message.html.as_deref(),
            text: message.text.as_deref(),
        }
    }

    async fn post_once(&self, message: &EmailMessage) -> Result<String, (bool, InfrastructureError)> {
        let mut request = self.client.post(&self.relay_url).json(&self.request_body(message));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| (e.is_timeout() || e.is_connect(), InfrastructureError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            let body = response.text().await.unwrap_or_default();
            return Err((
                retryable,
                InfrastructureError::Email(format!("Relay responded {}: {}", status, body)),
            ));
        }

        // The relay accepted the message; an unreadable body does not undo that
        let body = response.text().await.unwrap_or_default();
        Ok(message_id_from_body(&body))
    }

    /// Send with retry on rate limits, timeouts and server errors
    async fn send_with_retry(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(RETRY_DELAY_MS);

        loop {
            attempts += 1;
            debug!(
                "Sending email attempt {}/{} to {}",
                attempts,
                MAX_ATTEMPTS,
                mask_email(&message.to)
            );

            match self.post_once(message).await {
                Ok(message_id) => {
                    info!(
                        to = %mask_email(&message.to),
                        message_id = %message_id,
                        "Email sent via relay"
                    );
                    return Ok(message_id);
                }
                Err((retryable, e)) => {
                    error!("Failed to send email (attempt {}/{}): {}", attempts, MAX_ATTEMPTS, e);
                    if !retryable || attempts >= MAX_ATTEMPTS {
                        return Err(e);
                    }
                    warn!("Retrying email delivery after {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

/// Message id from a successful relay reply, generated when the body has none
pub(crate) fn message_id_from_body(body: &str) -> String {
    serde_json::from_str::<RelayResponse>(body)
        .ok()
        .and_then(|parsed| parsed.id)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| {
            debug!("Relay reply carried no message id");
            format!("relay_{}", uuid::Uuid::new_v4())
        })
}

#[async_trait]
impl EmailServiceTrait for RelayEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        self.send_with_retry(message).await.map_err(|e| e.to_string())
    }
}
