//! User repository traits.
//!
//! The read side ([`UserRepository`]) runs against the default connection
//! pool; the write side ([`UserTxSession`]) is a handle bound to an active
//! transaction, only ever obtained through
//! [`UnitOfWork::run`](crate::repositories::uow::UnitOfWork::run). Keeping
//! the transactional dependency in the signature (instead of smuggling a
//! transaction through an untyped context) makes the write path's atomicity
//! requirements visible at every call site.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Read-only user lookups outside any transaction
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
}

/// User persistence operations bound to an active transaction
#[async_trait]
pub trait UserTxSession: Send {
    /// Count users with the given email.
    ///
    /// Used as a friendly pre-check during registration; the database
    /// unique constraint remains the actual uniqueness guarantee.
    async fn count_by_email(&mut self, email: &str) -> Result<i64, DomainError>;

    /// Insert a new user.
    ///
    /// A unique-constraint violation on the email column is reported as
    /// [`AuthError::AlreadyExists`](crate::errors::AuthError::AlreadyExists).
    async fn insert(&mut self, user: &User) -> Result<(), DomainError>;
}
