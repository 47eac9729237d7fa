//! User directory trait: the narrow view of the managed auth backend that
//! the password reset flow needs.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Lookup and password update against the external account store
///
/// Implementations talk to the managed auth backend; the reset flow itself
/// never touches account storage directly.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use wander_core::repositories::UserDirectory;
/// use wander_core::domain::entities::Account;
/// use wander_core::errors::DomainError;
///
/// struct StaticDirectory;
///
/// #[async_trait]
/// impl UserDirectory for StaticDirectory {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
///         Ok(Some(Account::new("user-1", email)))
///     }
///
///     async fn update_password(&self, _account_id: &str, _new_password: &str) -> Result<(), DomainError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find an account by email address (case-insensitive)
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account uses this email
    /// * `Err(DomainError)` - The directory could not be queried
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Replace the password of an account
    async fn update_password(&self, account_id: &str, new_password: &str) -> Result<(), DomainError>;
}
