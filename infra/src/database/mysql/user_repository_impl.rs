//! MySQL implementation of the read-side user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use warden_core::domain::entities::user::User;
use warden_core::errors::DomainError;
use warden_core::repositories::user::UserRepository;

/// Read-only user lookups against the connection pool
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a User entity
pub(crate) fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::Database {
            message: format!("failed to get id: {e}"),
        })?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
            message: format!("invalid user id: {e}"),
        })?,
        email: row.try_get("email").map_err(|e| DomainError::Database {
            message: format!("failed to get email: {e}"),
        })?,
        password_hash: row
            .try_get("password_hash")
            .map_err(|e| DomainError::Database {
                message: format!("failed to get password_hash: {e}"),
            })?,
        name: row.try_get("name").map_err(|e| DomainError::Database {
            message: format!("failed to get name: {e}"),
        })?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| DomainError::Database {
                message: format!("failed to get created_at: {e}"),
            })?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(|e| DomainError::Database {
                message: format!("failed to get updated_at: {e}"),
            })?,
    })
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("database query failed: {e}"),
            })?;

        match result {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
