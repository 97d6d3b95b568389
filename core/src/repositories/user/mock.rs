//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository keyed by email.
///
/// Shares its state with [`MockUnitOfWork`](crate::repositories::uow::MockUnitOfWork)
/// so reads observe exactly what committed transactions wrote.
pub struct MockUserRepository {
    pub(crate) users: Arc<Mutex<HashMap<String, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository seeded with an existing user
    pub async fn with_user(user: User) -> Self {
        let repo = Self::new();
        repo.add_user(user).await;
        repo
    }

    /// Insert a user fixture directly, bypassing any transaction
    pub async fn add_user(&self, user: User) {
        self.users.lock().await.insert(user.email.clone(), user);
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.lock().await.len()
    }

    pub(crate) fn from_state(users: Arc<Mutex<HashMap<String, User>>>) -> Self {
        Self { users }
    }

    pub(crate) fn state(&self) -> Arc<Mutex<HashMap<String, User>>> {
        Arc::clone(&self.users)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().await;
        Ok(users.get(email).cloned())
    }
}
