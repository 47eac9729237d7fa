//! Mock Email Service Implementation
//!
//! Logs messages instead of sending them and keeps a copy for inspection.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use wander_core::domain::EmailMessage;
use wander_core::services::EmailServiceTrait;
use wander_shared::email::mask_email;

/// Messages kept for inspection; older ones are dropped
pub const OUTBOX_CAPACITY: usize = 100;

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Number of messages accepted
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Most recent accepted messages, oldest first
    outbox: Arc<Mutex<VecDeque<EmailMessage>>>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Copies of the retained messages, at most [`OUTBOX_CAPACITY`]
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The most recently accepted message
    pub fn last_message(&self) -> Option<EmailMessage> {
        self.outbox
            .lock()
            .ok()
            .and_then(|outbox| outbox.back().cloned())
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                to = %mask_email(&message.to),
                "Mock email service simulating failure"
            );
            return Err("Simulated email sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut outbox) = self.outbox.lock() {
            if outbox.len() == OUTBOX_CAPACITY {
                outbox.pop_front();
            }
            outbox.push_back(message.clone());
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(&message.to),
            subject = %message.subject,
            message_id = %message_id,
            count,
            "Email sent successfully (mock)"
        );
        debug!(
            target: "email_service",
            message_id = %message_id,
            body = message.text.as_deref().or(message.html.as_deref()).unwrap_or_default(),
            "Mock email body"
        );

        Ok(message_id)
    }
}
