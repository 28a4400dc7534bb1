//! Content domain state and auth backend integration

use crate::repository::ContentStore;
use axum::extract::FromRef;
use brain_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Content domain
#[derive(Clone)]
pub struct ContentState {
    pub content: Arc<dyn ContentStore>,
    pub auth: AuthBackend,
}

impl ContentState {
    pub fn new(content: Arc<dyn ContentStore>, auth: AuthBackend) -> Self {
        Self { content, auth }
    }
}

impl FromRef<ContentState> for AuthBackend {
    fn from_ref(state: &ContentState) -> Self {
        state.auth.clone()
    }
}
