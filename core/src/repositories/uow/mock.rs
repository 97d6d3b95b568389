//! In-memory unit of work for testing.
//!
//! Emulates the database's transactional behavior over a shared map:
//! writes are staged against a session and only applied on commit, the
//! whole transaction runs under one lock (so concurrent registrations
//! serialize exactly like competing row inserts), and the email key acts
//! as the unique constraint.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::user::{MockUserRepository, UserTxSession};

use super::trait_::{panic_message, UnitOfWork};

/// Mock unit of work over an in-memory user table
pub struct MockUnitOfWork {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MockUnitOfWork {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Build a unit of work sharing state with an existing mock repository
    pub fn sharing(repository: &MockUserRepository) -> Self {
        Self {
            users: repository.state(),
        }
    }

    /// A read-side repository over the same state
    pub fn repository(&self) -> MockUserRepository {
        MockUserRepository::from_state(Arc::clone(&self.users))
    }

    /// Number of committed users
    pub async fn user_count(&self) -> usize {
        self.users.lock().await.len()
    }
}

impl Default for MockUnitOfWork {
    fn default() -> Self {
        Self::new()
    }
}

/// Session handle for a mock transaction
pub struct MockTxSession {
    committed: OwnedMutexGuard<HashMap<String, User>>,
    staged: Vec<User>,
}

#[async_trait]
impl UserTxSession for MockTxSession {
    async fn count_by_email(&mut self, email: &str) -> Result<i64, DomainError> {
        let committed = i64::from(self.committed.contains_key(email));
        let staged = self.staged.iter().filter(|u| u.email == email).count() as i64;
        Ok(committed + staged)
    }

    async fn insert(&mut self, user: &User) -> Result<(), DomainError> {
        // The email key plays the role of the unique constraint.
        if self.committed.contains_key(&user.email)
            || self.staged.iter().any(|u| u.email == user.email)
        {
            return Err(AuthError::AlreadyExists.into());
        }
        self.staged.push(user.clone());
        Ok(())
    }
}

impl UnitOfWork for MockUnitOfWork {
    type Session = MockTxSession;

    fn run<'a, T, F>(&'a self, work: F) -> BoxFuture<'a, DomainResult<T>>
    where
        T: Send + 'a,
        F: for<'s> FnOnce(&'s mut Self::Session) -> BoxFuture<'s, DomainResult<T>> + Send + 'a,
    {
        Box::pin(async move {
            let committed = Arc::clone(&self.users).lock_owned().await;
            let mut session = MockTxSession {
                committed,
                staged: Vec::new(),
            };

            let outcome = AssertUnwindSafe(work(&mut session)).catch_unwind().await;

            match outcome {
                Ok(Ok(value)) => {
                    let MockTxSession {
                        mut committed,
                        staged,
                    } = session;
                    for user in staged {
                        committed.insert(user.email.clone(), user);
                    }
                    Ok(value)
                }
                Ok(Err(err)) => Err(err),
                Err(panic) => Err(DomainError::Internal {
                    message: panic_message(panic.as_ref()),
                }),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(email: &str) -> User {
        User::new(email, "hash", "Sample")
    }

    #[tokio::test]
    async fn successful_work_is_committed() {
        let uow = MockUnitOfWork::new();

        let created = uow
            .run(|session: &mut MockTxSession| {
                Box::pin(async move {
                    let user = sample_user("a@example.com");
                    session.insert(&user).await?;
                    Ok(user)
                })
            })
            .await
            .unwrap();

        assert_eq!(created.email, "a@example.com");
        assert_eq!(uow.user_count().await, 1);
    }

    #[tokio::test]
    async fn failed_work_leaves_no_side_effects() {
        let uow = MockUnitOfWork::new();

        let result: DomainResult<()> = uow
            .run(|session: &mut MockTxSession| {
                Box::pin(async move {
                    session.insert(&sample_user("a@example.com")).await?;
                    Err(DomainError::Validation {
                        message: "nope".to_string(),
                    })
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(uow.user_count().await, 0);
    }

    #[tokio::test]
    async fn panicking_work_rolls_back_without_crashing() {
        let uow = MockUnitOfWork::new();

        let result: DomainResult<()> = uow
            .run(|session: &mut MockTxSession| {
                Box::pin(async move {
                    session.insert(&sample_user("a@example.com")).await?;
                    panic!("boom");
                })
            })
            .await;

        match result {
            Err(DomainError::Internal { message }) => assert!(message.contains("boom")),
            other => panic!("expected internal error, got {other:?}"),
        }
        assert_eq!(uow.user_count().await, 0);
    }

    #[tokio::test]
    async fn duplicate_insert_in_one_transaction_is_rejected() {
        let uow = MockUnitOfWork::new();

        let result: DomainResult<()> = uow
            .run(|session: &mut MockTxSession| {
                Box::pin(async move {
                    session.insert(&sample_user("a@example.com")).await?;
                    session.insert(&sample_user("a@example.com")).await?;
                    Ok(())
                })
            })
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::AlreadyExists))
        ));
        assert_eq!(uow.user_count().await, 0);
    }
}
