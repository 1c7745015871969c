//! In-memory implementation of UserRepository for tests and database-less runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository
///
/// The username uniqueness check and the insert happen under one write lock.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(AuthError::DuplicateUsername.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn push_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.push_post(post_id);
        Ok(())
    }

    async fn pull_post(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users
            .get_mut(&user_id)
            .map(|user| user.pull_post(post_id))
            .unwrap_or(false))
    }
}
