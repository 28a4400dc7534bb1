//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::cookie::extract_cookie_token;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;

/// Locate the session token on a request.
///
/// An `Authorization` header takes precedence over the session cookie.
pub(crate) fn extract_request_token(headers: &HeaderMap) -> Result<String, AuthError> {
    if let Some(auth_header) = headers.get(AUTHORIZATION) {
        return extract_bearer_token(auth_header);
    }

    extract_cookie_token(headers).ok_or(AuthError::MissingToken)
}

/// Authenticated user extractor
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let token = extract_request_token(&parts.headers)?;
        let auth_context = backend.authenticate(&token)?;

        Ok(AuthUser(auth_context))
    }
}
