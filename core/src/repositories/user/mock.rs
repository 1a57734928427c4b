//! In-memory mock of [`UserRepository`] for tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::repository::UserRepository;

/// Mock user repository backed by a HashMap
///
/// Assigns sequential integer ids like the real SERIAL column and
/// reproduces the unique-email behavior of the storage layer. A forced
/// failure flag lets tests exercise the persistence-failure paths.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
    next_id: Arc<RwLock<i32>>,
    fail_next: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            fail_next: Arc::new(RwLock::new(false)),
        }
    }

    /// Make the next repository call fail with a database error
    pub async fn fail_next_call(&self) {
        *self.fail_next.write().await = true;
    }

    /// Seed a user directly, bypassing the uniqueness check
    pub async fn insert_raw(&self, user: User) {
        let mut users = self.users.write().await;
        let mut next_id = self.next_id.write().await;
        *next_id = (*next_id).max(user.id + 1);
        users.insert(user.id, user);
    }

    async fn take_forced_failure(&self) -> Result<(), DomainError> {
        let mut fail = self.fail_next.write().await;
        if *fail {
            *fail = false;
            return Err(DomainError::database("forced failure"));
        }
        Ok(())
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
        self.take_forced_failure().await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        self.take_forced_failure().await?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        self.take_forced_failure().await?;
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == new_user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let mut next_id = self.next_id.write().await;
        let user = User {
            id: *next_id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            banned: false,
            banned_at: None,
            is_admin: false,
            created_at: Utc::now(),
        };
        *next_id += 1;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.take_forced_failure().await?;
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }

    async fn set_banned(&self, id: i32, banned: bool) -> Result<bool, DomainError> {
        self.take_forced_failure().await?;
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                if banned {
                    user.ban();
                } else {
                    user.unban();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_account(&self, id: i32) -> Result<bool, DomainError> {
        self.take_forced_failure().await?;
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        self.take_forced_failure().await?;
        let users = self.users.read().await;
        Ok(users.len() as i64)
    }
}
