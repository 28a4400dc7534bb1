//! Content domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Kind of saved content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
    Link,
}

/// A saved item in a user's brain
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    #[sqlx(rename = "type")]
    pub content_type: ContentType,
    /// Tag IDs; always empty until tagging exists
    pub tags: Vec<Uuid>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Content {
    /// New untagged content owned by `user_id`
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        link: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            link: link.into(),
            content_type,
            tags: Vec::new(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
