//! Concrete authentication backend
//!
//! Holds the signing configuration and turns user IDs into session
//! tokens and session tokens back into an `AuthContext`.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::cookie::session_cookie;
use crate::error::AuthError;
use crate::jwt::{issue_session_token, validate_session_token};
use crate::types::SessionToken;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a session token for `user_id` starting now
    pub fn issue_session(&self, user_id: Uuid) -> Result<SessionToken, AuthError> {
        self.issue_session_at(user_id, Utc::now())
    }

    /// Issue a session token with an explicit issue time
    pub fn issue_session_at(
        &self,
        user_id: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, AuthError> {
        issue_session_token(user_id, issued_at, &self.config)
    }

    /// Validate a session token and resolve the user it was issued for
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_session_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::debug!(sub = %claims.sub, "Session token subject is not a UUID");
            AuthError::InvalidUserId
        })?;

        Ok(AuthContext::new(user_id))
    }

    /// `Set-Cookie` value carrying `session`
    pub fn session_cookie(&self, session: &SessionToken) -> Result<HeaderValue, AuthError> {
        session_cookie(
            &session.token,
            session.ttl_seconds(),
            self.config.cookie_secure,
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Session cookie could not be encoded");
            AuthError::TokenIssueFailed
        })
    }
}
