//! User repository trait defining the read-only identity lookups the
//! authentication layer needs.
//!
//! The user module owns account creation and management; this subsystem
//! only resolves credentials and subjects.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for resolving user identities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login name or email address
    ///
    /// The email arm must match case-insensitively; the username arm is
    /// matched exactly.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No account matches
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_username_or_email(
        &self,
        username_or_email: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
