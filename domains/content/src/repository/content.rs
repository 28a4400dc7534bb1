//! PostgreSQL content repository

use async_trait::async_trait;
use brain_common::{Error, RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

use super::ContentStore;
use crate::domain::entities::Content;

#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn create(&self, content: &Content) -> Result<Content> {
        let created: Content = sqlx::query_as(
            r#"
            INSERT INTO content (id, title, link, "type", tags, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, link, "type", tags, user_id, created_at
            "#,
        )
        .bind(content.id)
        .bind(&content.title)
        .bind(&content.link)
        .bind(content.content_type)
        .bind(&content.tags)
        .bind(content.user_id)
        .bind(content.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| create_error(RepositoryError::from(e)))?;

        Ok(created)
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Content>> {
        let content: Vec<Content> = sqlx::query_as(
            r#"
            SELECT id, title, link, "type", tags, user_id, created_at
            FROM content
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(content)
    }

    async fn delete_for_owner(&self, id: Uuid, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// The owner is a session user whose account row is gone
fn create_error(err: RepositoryError) -> Error {
    match err {
        RepositoryError::MissingReference => {
            tracing::debug!("Content owner has no account row");
            Error::Authentication("User account no longer exists".to_string())
        }
        other => other.into(),
    }
}
