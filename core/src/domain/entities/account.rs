//! Account entity as exposed by the external user directory.

use serde::{Deserialize, Serialize};
use wander_shared::email::normalize_email;

/// A staff account held by the managed auth backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Directory-assigned identifier
    pub id: String,
    /// Email address, if the account has one
    #[serde(default)]
    pub email: Option<String>,
}

impl Account {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
        }
    }

    /// Match against an email address after canonicalizing both sides
    pub fn has_email(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .map(|own| normalize_email(own) == normalize_email(email))
            .unwrap_or(false)
    }
}
