//! User storage for the Accounts domain
//!
//! Handlers talk to [`UserStore`]; production wires in [`PgUserStore`],
//! router tests use [`MockUserStore`].

pub mod mock;
pub mod users;

use async_trait::async_trait;
use brain_common::Result;

use crate::domain::entities::User;

pub use mock::MockUserStore;
pub use users::PgUserStore;

/// Persistence operations on users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. A taken email fails with `Error::Conflict`.
    async fn create(&self, user: &User) -> Result<User>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
