//! Session token value handed back to the signin flow

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A freshly issued session token and its validity window.
#[derive(Clone)]
pub struct SessionToken {
    pub token: String,
    pub user_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Lifetime in whole seconds
    pub fn ttl_seconds(&self) -> i64 {
        (self.expires_at - self.issued_at).num_seconds()
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
