//! Token repository trait defining the interface for refresh token
//! persistence.
//!
//! Revocation is delete-based: the existence of a row is what makes a
//! refresh token active. Rotation and logout remove rows; a periodic sweep
//! removes expired ones.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence operations
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError)` - Save failed (e.g. duplicate token value)
    async fn create(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find an active record by exact raw token value
    ///
    /// A record that exists is active; deleted records are gone. Expiry of
    /// rows the sweep has not yet reached is enforced here as well so a
    /// stale row never revives a session.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Active record found
    /// * `Ok(None)` - No active record with the given value
    /// * `Err(DomainError)` - Database error occurred
    async fn find_active(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a record by id
    ///
    /// Single-row delete; the returned flag reports whether a row was
    /// actually removed. Rotation relies on this as an atomic
    /// compare-and-delete: of two concurrent rotations of the same record,
    /// exactly one observes `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - Record existed and was deleted
    /// * `Ok(false)` - No record with the given id
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Bulk-delete all records whose expiry has passed
    ///
    /// Invoked periodically by the cleanup task.
    ///
    /// # Returns
    /// * `Ok(usize)` - Exact number of records removed
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
