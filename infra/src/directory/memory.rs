//! In-memory user directory

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use wander_core::domain::Account;
use wander_core::errors::DomainError;
use wander_core::repositories::UserDirectory;

use crate::InfrastructureError;

#[derive(Default)]
struct Store {
    accounts: Vec<Account>,
    passwords: HashMap<String, String>,
}

/// User directory held in process memory
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let directory = Self::new();
        for account in accounts {
            directory.insert(account);
        }
        directory
    }

    /// Add or replace an account by id
    pub fn insert(&self, account: Account) {
        if let Ok(mut store) = self.store.write() {
            store.accounts.retain(|a| a.id != account.id);
            store.accounts.push(account);
        }
    }

    /// Current password of an account, if one was ever set
    pub fn password_of(&self, account_id: &str) -> Option<String> {
        self.store
            .read()
            .ok()
            .and_then(|store| store.passwords.get(account_id).cloned())
    }

    fn poisoned() -> DomainError {
        InfrastructureError::Directory("In-memory directory lock poisoned".to_string()).into()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.accounts.iter().find(|a| a.has_email(email)).cloned())
    }

    async fn update_password(&self, account_id: &str, new_password: &str) -> Result<(), DomainError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        if !store.accounts.iter().any(|a| a.id == account_id) {
            return Err(DomainError::NotFound {
                resource: format!("account {}", account_id),
            });
        }
        store
            .passwords
            .insert(account_id.to_string(), new_password.to_string());
        Ok(())
    }
}
