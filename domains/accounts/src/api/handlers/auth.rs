//! Signup and signin handlers
//!
//! - POST /api/v1/signup - Register a new user
//! - POST /api/v1/signin - Exchange credentials for a session cookie

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};
use brain_auth::{hash_password, verify_password, verify_password_without_account};
use brain_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;
use crate::domain::validation::validate_email_domain;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Email and password, shared by signup and signin
#[derive(Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(
        length(min = 3, max = 50),
        email,
        custom(function = "validate_email_domain")
    )]
    pub email: String,

    #[validate(length(min = 8, max = 20))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Register a new user
pub async fn signup(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(req.password).await?;
    let user = state
        .users
        .create(&User::new(req.email, password_hash))
        .await?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        MessageResponse::json("User signed up successfully"),
    ))
}

/// Verify credentials and set the session cookie
pub async fn signin(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<impl IntoResponse> {
    let Some(user) = state.users.find_by_email(&req.email).await? else {
        tracing::debug!("Signin for unknown email");
        verify_password_without_account(req.password).await?;
        return Err(Error::Authorization(INVALID_CREDENTIALS.to_string()));
    };

    if !verify_password(req.password, user.password_hash.clone()).await? {
        tracing::debug!(user_id = %user.id, "Signin with wrong password");
        return Err(Error::Authorization(INVALID_CREDENTIALS.to_string()));
    }

    let session = state.auth.issue_session(user.id)?;
    let cookie = state.auth.session_cookie(&session)?;

    tracing::info!(user_id = %user.id, "User signed in");

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        MessageResponse::json("Signed in successfully"),
    ))
}
