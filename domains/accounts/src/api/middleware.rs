//! Accounts domain state and auth backend integration

use crate::repository::UserStore;
use axum::extract::FromRef;
use brain_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: Arc<dyn UserStore>,
    pub auth: AuthBackend,
}

impl AccountsState {
    pub fn new(users: Arc<dyn UserStore>, auth: AuthBackend) -> Self {
        Self { users, auth }
    }
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
