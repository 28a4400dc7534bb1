//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidUserId,
    TokenIssueFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "MISSING_TOKEN",
                "Authorization token required",
            ),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid or expired token",
            ),
            AuthError::InvalidUserId => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid user ID in token",
            ),
            AuthError::TokenIssueFailed => {
                tracing::error!("Session token could not be issued");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for brain_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenIssueFailed => {
                brain_common::Error::Internal("Session token could not be issued".to_string())
            }
            AuthError::MissingToken => {
                brain_common::Error::Authentication("Authorization token required".to_string())
            }
            _ => brain_common::Error::Authentication("Invalid or expired token".to_string()),
        }
    }
}
