//! Content storage for the Content domain

pub mod content;
pub mod mock;

use async_trait::async_trait;
use brain_common::Result;
use uuid::Uuid;

use crate::domain::entities::Content;

pub use content::PgContentStore;
pub use mock::MockContentStore;

/// Persistence operations on content. Every read and delete is scoped to an owner.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn create(&self, content: &Content) -> Result<Content>;

    /// All content owned by `user_id`, newest first
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Content>>;

    /// Delete `id` if it belongs to `user_id`. Returns the number of rows removed.
    async fn delete_for_owner(&self, id: Uuid, user_id: Uuid) -> Result<u64>;
}
