//! Authentication configuration

use brain_common::Config;

/// Session lifetime: 2 days
pub const SESSION_TTL_SECONDS: i64 = 2 * 24 * 60 * 60;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_ttl_seconds: i64,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            session_ttl_seconds: SESSION_TTL_SECONDS,
            cookie_secure: false,
        }
    }

    pub fn with_secure_cookie(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        AuthConfig::new(config.jwt_secret.clone())
            .with_secure_cookie(config.app_env.is_production())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("session_ttl_seconds", &self.session_ttl_seconds)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}
