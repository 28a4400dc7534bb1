//! Second Brain application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::{routing::get, Router};
use brain_accounts::{AccountsState, PgUserStore, UserStore};
use brain_auth::{AuthBackend, AuthConfig};
use brain_common::Config;
use brain_content::{ContentState, ContentStore, PgContentStore};
use sqlx::{migrate::MigrateError, PgPool};

/// Create the main application router backed by PostgreSQL
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(AuthConfig::from(config));

    build_router(
        auth,
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(PgContentStore::new(pool)),
    )
}

/// Compose domain routers over the given stores
pub fn build_router(
    auth: AuthBackend,
    users: Arc<dyn UserStore>,
    content: Arc<dyn ContentStore>,
) -> Router {
    let accounts_state = AccountsState::new(users, auth.clone());
    let content_state = ContentState::new(content, auth);

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(banner))
        .merge(brain_accounts::routes().with_state(accounts_state))
        .merge(brain_content::routes().with_state(content_state))
}

/// Apply pending schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn banner() -> String {
    format!("Second Brain API v{}", env!("CARGO_PKG_VERSION"))
}
