//! PostgreSQL user repository

use async_trait::async_trait;
use brain_common::{Error, RepositoryError, Result};
use sqlx::PgPool;

use super::UserStore;
use crate::domain::entities::User;

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: &User) -> Result<User> {
        let created: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match RepositoryError::from(e) {
            RepositoryError::AlreadyExists => Error::Conflict("User already exists".to_string()),
            other => other.into(),
        })?;

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
