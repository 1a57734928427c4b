//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Persistence contract for user accounts
///
/// Implementations own the `users` table. Email uniqueness is enforced at
/// the storage layer: `create` must surface a duplicate email as
/// [`crate::errors::AuthError::UserAlreadyExists`] so races between the
/// duplicate pre-check and the insert stay distinguishable from other
/// persistence failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Insert a new account and return the persisted row
    ///
    /// A duplicate email yields `AuthError::UserAlreadyExists`.
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// All accounts, newest first
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Set or clear the banned flag; returns false if the user is unknown
    async fn set_banned(&self, id: i32, banned: bool) -> Result<bool, DomainError>;

    /// Delete an account and everything it owns (posts, likes, comments,
    /// views) in a single transaction; returns false if the user is
    /// unknown
    async fn delete_account(&self, id: i32) -> Result<bool, DomainError>;

    /// Total number of accounts
    async fn count(&self) -> Result<i64, DomainError>;
}
