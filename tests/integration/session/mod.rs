//! Session gate behaviour on protected routes

use axum::http::{header::AUTHORIZATION, Method, StatusCode};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::common::{
    authed_request, cookie_request, create_test_jwt, json_request, token_for_unknown_user,
    TestApp, TEST_JWT_SECRET,
};

const CONTENT: &str = "/api/v1/content";

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(json_request(Method::GET, CONTENT, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let token = create_test_jwt(
        &Uuid::new_v4().to_string(),
        TEST_JWT_SECRET,
        Utc::now() - Duration::days(3),
        Duration::days(2),
    );

    let (status, body) = app
        .send_json(authed_request(Method::GET, CONTENT, &token, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_foreign_secret_is_unauthorized() {
    let app = TestApp::new();
    let token = create_test_jwt(
        &Uuid::new_v4().to_string(),
        "some-other-secret",
        Utc::now(),
        Duration::days(2),
    );

    let (status, _) = app
        .send_json(authed_request(Method::GET, CONTENT, &token, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_unauthorized() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let sig_start = token.rfind('.').unwrap() + 1;
    let flipped = if token[sig_start..].starts_with('A') { "B" } else { "A" };
    let tampered = format!("{}{}{}", &token[..sig_start], flipped, &token[sig_start + 1..]);

    let (status, _) = app
        .send_json(authed_request(Method::GET, CONTENT, &tampered, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_uuid_subject_is_unauthorized() {
    let app = TestApp::new();
    let token = create_test_jwt("someone", TEST_JWT_SECRET, Utc::now(), Duration::days(2));

    let (status, _) = app
        .send_json(authed_request(Method::GET, CONTENT, &token, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bare_authorization_header_is_accepted() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let mut request = json_request(Method::GET, CONTENT, None);
    request
        .headers_mut()
        .insert(AUTHORIZATION, token.parse().unwrap());

    let (status, _) = app.send_json(request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_authorization_header_wins_over_cookie() {
    let app = TestApp::new();
    let alice = app.login("alice@b.com").await;
    let bob = app.login("bob@b.com").await;

    let mut request = cookie_request(
        Method::POST,
        CONTENT,
        &bob,
        Some(serde_json::json!({
            "title": "Whose is this",
            "link": "https://example.com",
            "type": "text"
        })),
    );
    request
        .headers_mut()
        .insert(AUTHORIZATION, format!("Bearer {alice}").parse().unwrap());

    let (status, _) = app.send_json(request).await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = app.content.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0].user_id,
        app.users.get("alice@b.com").unwrap().id
    );
}

#[tokio::test]
async fn test_valid_token_for_unknown_user_sees_empty_brain() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(authed_request(
            Method::GET,
            CONTENT,
            &token_for_unknown_user(),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], serde_json::json!([]));
}
