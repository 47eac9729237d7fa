//! Supabase admin API user directory
//!
//! Accounts are found by paging through `GET /auth/v1/admin/users` and
//! matching the email case-insensitively; the admin API has no lookup by
//! email. Scanning stops at the first match or at a short page.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use wander_core::domain::Account;
use wander_core::errors::DomainError;
use wander_core::repositories::UserDirectory;
use wander_shared::email::mask_email;
use wander_shared::DirectoryConfig;

use crate::InfrastructureError;

/// User directory backed by the Supabase auth admin API
#[derive(Clone)]
pub struct SupabaseUserDirectory {
    http: Client,
    url: String,
    service_role_key: String,
    per_page: u32,
}

/// One page of the admin user listing
#[derive(Debug, Deserialize)]
pub(crate) struct UserPage {
    #[serde(default)]
    pub users: Vec<Account>,
}

impl SupabaseUserDirectory {
    /// Create a directory client from configuration
    pub fn new(config: &DirectoryConfig) -> Result<Self, InfrastructureError> {
        let url = config
            .url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or_else(|| InfrastructureError::Config("Supabase URL is not set".to_string()))?
            .to_string();
        let service_role_key = config
            .service_role_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config("Supabase service role key is not set".to_string())
            })?
            .to_string();
        if config.per_page == 0 {
            return Err(InfrastructureError::Config("Directory page size must be positive".to_string()));
        }

        let http = Client::builder()
            .user_agent("wander-dashboard")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(url = %url, per_page = config.per_page, "Supabase user directory initialized");

        Ok(Self {
            http,
            url,
            service_role_key,
            per_page: config.per_page,
        })
    }

    pub(crate) fn users_url(&self) -> String {
        format!("{}/auth/v1/admin/users", self.url)
    }

    pub(crate) fn user_url(&self, account_id: &str) -> String {
        format!("{}/auth/v1/admin/users/{}", self.url, account_id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    async fn fetch_page(&self, page: u32) -> Result<UserPage, InfrastructureError> {
        let response = self
            .authorized(self.http.get(self.users_url()))
            .query(&[("page", page), ("per_page", self.per_page)])
            .send()
            .await?;
        let response = ensure_success(response, "list users").await?;
        Ok(response.json().await?)
    }

    async fn scan_for(&self, email: &str) -> Result<Option<Account>, InfrastructureError> {
        let mut page = 1;
        loop {
            let batch = self.fetch_page(page).await?;
            debug!(page, count = batch.users.len(), "Fetched directory page");

            if let Some(account) = batch.users.iter().find(|a| a.has_email(email)) {
                return Ok(Some(account.clone()));
            }
            if batch.users.len() < self.per_page as usize {
                return Ok(None);
            }
            page += 1;
        }
    }

    async fn put_password(&self, account_id: &str, new_password: &str) -> Result<(), InfrastructureError> {
        let response = self
            .authorized(self.http.put(self.user_url(account_id)))
            .json(&serde_json::json!({ "password": new_password }))
            .send()
            .await?;
        ensure_success(response, "update user").await?;
        Ok(())
    }
}

async fn ensure_success(response: Response, action: &str) -> Result<Response, InfrastructureError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!(%status, action, "Supabase admin request failed");
    Err(InfrastructureError::Directory(format!(
        "{} failed with {}: {}",
        action, status, body
    )))
}

#[async_trait]
impl UserDirectory for SupabaseUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let found = self.scan_for(email).await?;
        if found.is_none() {
            debug!(email = %mask_email(email), "No directory account for email");
        }
        Ok(found)
    }

    async fn update_password(&self, account_id: &str, new_password: &str) -> Result<(), DomainError> {
        self.put_password(account_id, new_password).await?;
        info!(account_id, "Directory password updated");
        Ok(())
    }
}
