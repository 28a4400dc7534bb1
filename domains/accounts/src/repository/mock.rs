//! In-memory user store
//!
//! Backs router and integration tests without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use brain_common::{Error, Result};

use super::UserStore;
use crate::domain::entities::User;

/// User store keyed by email
#[derive(Debug, Clone, Default)]
pub struct MockUserStore {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the stored user for `email`
    pub fn get(&self, email: &str) -> Option<User> {
        self.lock().get(email).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn create(&self, user: &User) -> Result<User> {
        let mut users = self.lock();
        if users.contains_key(&user.email) {
            return Err(Error::Conflict("User already exists".to_string()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.lock().get(email).cloned())
    }
}
