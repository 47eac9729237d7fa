//! Mock implementations for testing the password reset service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{Account, EmailMessage};
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserDirectory;
use crate::services::password_reset::EmailServiceTrait;

// Mock email service for testing
pub struct MockEmailService {
    pub sent_messages: Arc<Mutex<Vec<EmailMessage>>>,
    pub should_fail: bool,
}

impl MockEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent_messages.lock().unwrap().clone()
    }

    /// Pull the 6-digit code out of the last reset email
    pub fn last_code(&self) -> Option<String> {
        let messages = self.sent_messages.lock().unwrap();
        let text = messages.last()?.text.clone()?;
        text.split_whitespace()
            .map(|word| word.trim_end_matches('.'))
            .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        if self.should_fail {
            return Err("Email service error".to_string());
        }
        self.sent_messages.lock().unwrap().push(message.clone());
        Ok(format!("mock-email-{}", uuid::Uuid::new_v4()))
    }
}

// Mock user directory for testing
pub struct MockUserDirectory {
    pub accounts: Vec<Account>,
    pub passwords: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockUserDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            passwords: Arc::new(Mutex::new(HashMap::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn password_of(&self, account_id: &str) -> Option<String> {
        self.passwords.lock().unwrap().get(account_id).cloned()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        if self.should_fail {
            return Err(AuthError::DirectoryFailure {
                message: "Directory unavailable".to_string(),
            }
            .into());
        }
        Ok(self.accounts.iter().find(|a| a.has_email(email)).cloned())
    }

    async fn update_password(&self, account_id: &str, new_password: &str) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(AuthError::DirectoryFailure {
                message: "Directory unavailable".to_string(),
            }
            .into());
        }
        self.passwords
            .lock()
            .unwrap()
            .insert(account_id.to_string(), new_password.to_string());
        Ok(())
    }
}
