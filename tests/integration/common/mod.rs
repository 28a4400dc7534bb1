//! Common test utilities and fixtures for integration tests
//!
//! Provides the composed application over in-memory stores plus
//! request and token helpers.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE},
        Method, Request, Response, StatusCode,
    },
    Router,
};
use brain_accounts::MockUserStore;
use brain_auth::{AuthBackend, AuthConfig, SessionClaims};
use brain_content::MockContentStore;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

pub const TEST_PASSWORD: &str = "password1";

/// Composed application plus handles on its stores
pub struct TestApp {
    pub router: Router,
    pub users: MockUserStore,
    pub content: MockContentStore,
    pub auth: AuthBackend,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_auth_config(AuthConfig::new(TEST_JWT_SECRET))
    }

    /// Application configured as in production (secure cookies)
    pub fn production() -> Self {
        Self::with_auth_config(AuthConfig::new(TEST_JWT_SECRET).with_secure_cookie(true))
    }

    fn with_auth_config(config: AuthConfig) -> Self {
        let users = MockUserStore::new();
        let content = MockContentStore::new();
        let auth = AuthBackend::new(config);

        let router = brain_app::build_router(
            auth.clone(),
            Arc::new(users.clone()),
            Arc::new(content.clone()),
        );

        Self {
            router,
            users,
            content,
            auth,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send and parse the JSON body (Null when the body is not JSON)
    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        (status, parse_body(response).await)
    }

    pub async fn signup(&self, email: &str, password: &str) -> StatusCode {
        let request = json_request(
            Method::POST,
            "/api/v1/signup",
            Some(json!({ "email": email, "password": password })),
        );
        self.send(request).await.status()
    }

    /// Sign in and return the raw `Set-Cookie` header, if any
    pub async fn signin(&self, email: &str, password: &str) -> (StatusCode, Option<String>) {
        let request = json_request(
            Method::POST,
            "/api/v1/signin",
            Some(json!({ "email": email, "password": password })),
        );
        let response = self.send(request).await;
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        (response.status(), cookie)
    }

    /// Register and sign in a user, returning the session token from the cookie
    pub async fn login(&self, email: &str) -> String {
        assert_eq!(self.signup(email, TEST_PASSWORD).await, StatusCode::CREATED);
        let (status, cookie) = self.signin(email, TEST_PASSWORD).await;
        assert_eq!(status, StatusCode::OK);
        token_from_cookie(&cookie.unwrap())
    }
}

/// Extract the session token from a `Set-Cookie` value
pub fn token_from_cookie(set_cookie: &str) -> String {
    set_cookie
        .strip_prefix("token=")
        .and_then(|rest| rest.split(';').next())
        .unwrap()
        .to_string()
}

/// Build a request with an optional JSON body
pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(b) = body {
        builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Build a request authenticated with `Authorization: Bearer`
pub fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let mut request = json_request(method, uri, body);
    request
        .headers_mut()
        .insert(AUTHORIZATION, format!("Bearer {jwt}").parse().unwrap());
    request
}

/// Build a request authenticated with the session cookie
pub fn cookie_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let mut request = json_request(method, uri, body);
    request
        .headers_mut()
        .insert(COOKIE, format!("token={jwt}").parse().unwrap());
    request
}

/// Parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Sign a token directly, bypassing the backend
pub fn create_test_jwt(sub: &str, secret: &str, issued_at: DateTime<Utc>, ttl: Duration) -> String {
    let claims = SessionClaims {
        sub: sub.to_string(),
        iat: issued_at.timestamp() as u64,
        exp: (issued_at + ttl).timestamp() as u64,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .unwrap()
}

/// A valid token for a user that never signed up
pub fn token_for_unknown_user() -> String {
    create_test_jwt(
        &Uuid::new_v4().to_string(),
        TEST_JWT_SECRET,
        Utc::now(),
        Duration::days(2),
    )
}
