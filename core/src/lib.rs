//! # Wander Core
//!
//! Core business logic for the Wander dashboard backend.
//!
//! The heart of this crate is a stateless password reset flow: one-time codes
//! and reset authorizations travel inside HMAC-signed, expiring bearer tokens,
//! so any number of service instances can serve the flow without shared
//! storage. The crate also defines the collaborator interfaces (email sender,
//! user directory) that the infrastructure layer implements.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
