//! Session token signing, validation, and header extraction helpers

use axum::http::HeaderValue;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::SessionToken;

/// Sign a session token for `user_id`, valid from `issued_at` for the configured TTL
pub(crate) fn issue_session_token(
    user_id: Uuid,
    issued_at: DateTime<Utc>,
    config: &AuthConfig,
) -> Result<SessionToken, AuthError> {
    let expires_at = issued_at + Duration::seconds(config.session_ttl_seconds);

    let claims = SessionClaims {
        sub: user_id.to_string(),
        iat: issued_at.timestamp().max(0) as u64,
        exp: expires_at.timestamp().max(0) as u64,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })?;

    Ok(SessionToken {
        token,
        user_id,
        issued_at,
        expires_at,
    })
}

/// Validate signature and expiry of a session token
pub(crate) fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract the token from an Authorization header.
///
/// Accepts both `Bearer <token>` and a bare token.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?
        .trim();

    let token = match header_str.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if header_str.eq_ignore_ascii_case("bearer") => "",
        _ => header_str,
    };

    if token.is_empty() {
        Err(AuthError::InvalidAuthorizationFormat)
    } else {
        Ok(token.to_string())
    }
}
