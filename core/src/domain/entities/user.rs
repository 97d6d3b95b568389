//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The core only ever reads this entity for credential checks and creates
/// it through the registration path; all other user management lives in the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, used as the token subject
    pub id: Uuid,

    /// Email address (unique)
    pub email: String,

    /// bcrypt hash of the password; the raw password is never stored
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh id and timestamps.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
