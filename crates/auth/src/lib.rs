//! Authentication for the Second Brain API
//!
//! Provides session token issuing and validation, bcrypt password hashing,
//! the session cookie, and axum extractors that work with any domain state
//! implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod jwt;
mod password;
mod types;

pub use backend::AuthBackend;
pub use claims::SessionClaims;
pub use config::{AuthConfig, SESSION_TTL_SECONDS};
pub use context::AuthContext;
pub use cookie::{session_cookie, SESSION_COOKIE_NAME};
pub use error::AuthError;
pub use extractors::AuthUser;
pub use password::{hash_password, verify_password, verify_password_without_account, HASH_COST};
pub use types::SessionToken;
