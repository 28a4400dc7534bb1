//! Route definitions for Content domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{brain, content};
use super::middleware::ContentState;

fn content_routes() -> Router<ContentState> {
    Router::new().route(
        "/api/v1/content",
        post(content::create_content)
            .get(content::list_content)
            .delete(content::delete_content),
    )
}

fn brain_routes() -> Router<ContentState> {
    Router::new()
        .route("/api/v1/brain/share", post(brain::share_brain))
        .route("/api/v1/brain/{share_link}", get(brain::get_shared_brain))
}

/// Create all Content domain routes
pub fn routes() -> Router<ContentState> {
    Router::new().merge(content_routes()).merge(brain_routes())
}
