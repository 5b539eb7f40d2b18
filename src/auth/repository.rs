// In-memory user repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::{error::AuthError, models::User};

/// User repository backed by process memory
///
/// Users are only ever added; the map lives as long as the process.
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserRepository {
    /// Create an empty UserRepository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user; fails if the username is taken
    pub async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AuthError> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    /// Find a user by exact username
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }

    /// Check if a username is registered
    pub async fn username_exists(&self, username: &str) -> bool {
        self.users.read().await.contains_key(username)
    }

    /// Number of registered users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
