//! In-memory content store

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use brain_common::Result;
use uuid::Uuid;

use super::ContentStore;
use crate::domain::entities::Content;

#[derive(Debug, Clone, Default)]
pub struct MockContentStore {
    items: Arc<Mutex<Vec<Content>>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored record regardless of owner
    pub fn all(&self) -> Vec<Content> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Content>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn create(&self, content: &Content) -> Result<Content> {
        self.lock().push(content.clone());
        Ok(content.clone())
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Content>> {
        // Reverse insertion order first so equal timestamps still list newest first
        let mut owned: Vec<Content> = self
            .lock()
            .iter()
            .rev()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn delete_for_owner(&self, id: Uuid, user_id: Uuid) -> Result<u64> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|c| !(c.id == id && c.user_id == user_id));
        Ok((before - items.len()) as u64)
    }
}
