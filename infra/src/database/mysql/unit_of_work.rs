//! MySQL unit of work.
//!
//! `run` owns the whole transaction lifecycle: the callback only ever sees
//! a session handle bound to the live transaction and communicates success
//! or failure through its returned `Result`. The session's statements run
//! on the transaction connection itself, so plain persistence calls
//! participate in the transaction without being transaction-aware.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use sqlx::{MySql, MySqlPool, Transaction};
use std::panic::AssertUnwindSafe;
use tracing::{error, warn};

use warden_core::domain::entities::user::User;
use warden_core::errors::{AuthError, DomainError, DomainResult};
use warden_core::repositories::uow::{panic_message, UnitOfWork};
use warden_core::repositories::user::UserTxSession;

/// Unit of work over a MySQL connection pool
pub struct MySqlUnitOfWork {
    pool: MySqlPool,
}

impl MySqlUnitOfWork {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Session handle bound to an active MySQL transaction
pub struct MySqlTxSession {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl UserTxSession for MySqlTxSession {
    async fn count_by_email(&mut self, email: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("count by email failed: {e}"),
            })
    }

    async fn insert(&mut self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (id, email, password_hash, name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&mut *self.tx)
            .await
            .map(|_| ())
            .map_err(map_insert_error)
    }
}

/// The unique key on `users.email` is the actual duplicate-registration
/// guard; its violation becomes the domain-level `AlreadyExists`.
fn map_insert_error(error: sqlx::Error) -> DomainError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::AlreadyExists.into(),
        _ => DomainError::Database {
            message: format!("user insert failed: {error}"),
        },
    }
}

impl UnitOfWork for MySqlUnitOfWork {
    type Session = MySqlTxSession;

    fn run<'a, T, F>(&'a self, work: F) -> BoxFuture<'a, DomainResult<T>>
    where
        T: Send + 'a,
        F: for<'s> FnOnce(&'s mut Self::Session) -> BoxFuture<'s, DomainResult<T>> + Send + 'a,
    {
        Box::pin(async move {
            let tx = self
                .pool
                .begin()
                .await
                .map_err(|e| DomainError::Database {
                    message: format!("failed to begin transaction: {e}"),
                })?;
            let mut session = MySqlTxSession { tx };

            let outcome = AssertUnwindSafe(work(&mut session)).catch_unwind().await;

            match outcome {
                Ok(Ok(value)) => {
                    session.tx.commit().await.map_err(|e| DomainError::Database {
                        message: format!("transaction commit failed: {e}"),
                    })?;
                    Ok(value)
                }
                Ok(Err(err)) => {
                    if let Err(rollback_err) = session.tx.rollback().await {
                        warn!(error = %rollback_err, "transaction rollback failed");
                    }
                    Err(err)
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    error!(message = %message, "transaction callback panicked");
                    if let Err(rollback_err) = session.tx.rollback().await {
                        warn!(error = %rollback_err, "transaction rollback failed");
                    }
                    Err(DomainError::Internal { message })
                }
            }
        })
    }
}
