//! Password reset workflow
//!
//! Ties the stateless token primitives to the two collaborators the flow
//! needs: an email sender for delivering codes and the external user
//! directory that owns the accounts.

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::PasswordResetConfig;
pub use service::{DynPasswordResetService, PasswordResetService};
pub use traits::EmailServiceTrait;
pub use types::SendCodeResult;
