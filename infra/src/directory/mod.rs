//! User Directory Module
//!
//! Account lookup and password updates against the managed auth backend.
//! The Supabase implementation talks to the GoTrue admin API with the
//! service role key; the in-memory implementation backs development and
//! tests.

pub mod memory;
pub mod supabase;

pub use memory::InMemoryUserDirectory;
pub use supabase::SupabaseUserDirectory;


use std::sync::Arc;

use wander_core::repositories::UserDirectory;
use wander_shared::DirectoryConfig;

use crate::InfrastructureError;

/// Create a user directory based on configuration
pub fn create_user_directory(
    config: &DirectoryConfig,
) -> Result<Arc<dyn UserDirectory>, InfrastructureError> {
    match config.provider.as_str() {
        "memory" => {
            tracing::warn!("Using in-memory user directory; password changes are not persisted");
            Ok(Arc::new(InMemoryUserDirectory::new()))
        }
        "supabase" => Ok(Arc::new(SupabaseUserDirectory::new(config)?)),
        other => Err(InfrastructureError::Config(format!(
            "Unknown directory provider '{}'",
            other
        ))),
    }
}
