//! Shared application state

use std::sync::Arc;

use wander_core::services::DynPasswordResetService;
use wander_shared::Environment;

/// Application state that holds shared services
pub struct AppState {
    pub reset_service: Arc<DynPasswordResetService>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(reset_service: Arc<DynPasswordResetService>, environment: Environment) -> Self {
        Self {
            reset_service,
            environment,
        }
    }
}
