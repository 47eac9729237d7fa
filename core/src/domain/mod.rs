//! Domain layer containing the value types of the password reset flow.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
