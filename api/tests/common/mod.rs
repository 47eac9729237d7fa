//! Shared helpers for API tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use wander_api::AppState;
use wander_core::domain::Account;
use wander_core::repositories::UserDirectory;
use wander_core::services::{
    EmailServiceTrait, FixedClock, PasswordResetConfig, PasswordResetService, TokenCodec,
};
use wander_infra::directory::InMemoryUserDirectory;
use wander_infra::email::MockEmailService;
use wander_shared::{AppConfig, Environment};

pub const SECRET: &str = "api-test-secret";
pub const NOW: i64 = 1_700_000_000;

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub config: AppConfig,
    pub email: MockEmailService,
    pub directory: InMemoryUserDirectory,
    pub clock: Arc<FixedClock>,
}

/// Build app state over a mock mailer and an in-memory directory
pub fn test_context() -> TestContext {
    let email = MockEmailService::new();
    let directory =
        InMemoryUserDirectory::with_accounts(vec![Account::new("user-1", "Editor@Wander.io")]);
    let clock = Arc::new(FixedClock::new(NOW));

    let mailer: Arc<dyn EmailServiceTrait> = Arc::new(email.clone());
    let accounts: Arc<dyn UserDirectory> = Arc::new(directory.clone());
    let service = PasswordResetService::new(
        mailer,
        accounts,
        TokenCodec::new(SECRET).unwrap(),
        clock.clone(),
        PasswordResetConfig::default(),
    );
    let state = web::Data::new(AppState::new(Arc::new(service), Environment::Development));

    TestContext {
        state,
        config: AppConfig::default(),
        email,
        directory,
        clock,
    }
}

/// Pull the 6-digit code out of the last email the mock accepted
pub fn last_code(email: &MockEmailService) -> String {
    let text = email.last_message().and_then(|m| m.text).unwrap_or_default();
    text.split_whitespace()
        .map(|word| word.trim_end_matches('.'))
        .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .expect("reset email carries a code")
}
