//! Content CRUD through the composed application

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::{authed_request, cookie_request, TestApp};

const CONTENT: &str = "/api/v1/content";

fn item(title: &str, kind: &str) -> Value {
    json!({ "title": title, "link": "https://example.com/post", "type": kind })
}

async fn create(app: &TestApp, token: &str, body: Value) -> String {
    let (status, body) = app
        .send_json(authed_request(Method::POST, CONTENT, token, Some(body)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn list(app: &TestApp, token: &str) -> Vec<Value> {
    let (status, body) = app
        .send_json(authed_request(Method::GET, CONTENT, token, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    body["content"].as_array().unwrap().clone()
}

#[tokio::test]
async fn test_create_list_delete_roundtrip() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let first = create(&app, &token, item("First note", "text")).await;
    let second = create(&app, &token, item("Second clip", "video")).await;

    let items = list(&app, &token).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], second);
    assert_eq!(items[1]["id"], first);
    assert_eq!(items[0]["type"], "video");

    let (status, body) = app
        .send_json(authed_request(
            Method::DELETE,
            CONTENT,
            &token,
            Some(json!({ "contentId": first })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let items = list(&app, &token).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], second);
}

#[tokio::test]
async fn test_cookie_session_reaches_content() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let (status, _) = app
        .send_json(cookie_request(
            Method::POST,
            CONTENT,
            &token,
            Some(item("Cookie auth", "link")),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send_json(cookie_request(Method::GET, CONTENT, &token, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_content_is_isolated_between_users() {
    let app = TestApp::new();
    let alice = app.login("alice@b.com").await;
    let bob = app.login("bob@b.com").await;

    let alice_item = create(&app, &alice, item("Alice private", "audio")).await;

    assert!(list(&app, &bob).await.is_empty());

    let (status, _) = app
        .send_json(authed_request(
            Method::DELETE,
            CONTENT,
            &bob,
            Some(json!({ "contentId": alice_item })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let items = list(&app, &alice).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], alice_item);
    assert_eq!(
        items[0]["userId"],
        app.users.get("alice@b.com").unwrap().id.to_string()
    );
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    for body in [
        json!({ "title": "no", "link": "https://example.com", "type": "text" }),
        json!({ "title": "Title", "link": "x".repeat(401), "type": "text" }),
        json!({ "title": "Title", "link": "https://example.com", "type": "tweet" }),
        json!({ "link": "https://example.com", "type": "text" }),
    ] {
        let (status, body) = app
            .send_json(authed_request(Method::POST, CONTENT, &token, Some(body)))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
    assert!(app.content.all().is_empty());
}

#[tokio::test]
async fn test_title_and_link_limits_are_inclusive() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let id = create(
        &app,
        &token,
        json!({ "title": "t".repeat(300), "link": "l".repeat(400), "type": "audio" }),
    )
    .await;

    let items = list(&app, &token).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
    assert_eq!(items[0]["title"].as_str().unwrap().len(), 300);
    assert_eq!(items[0]["link"].as_str().unwrap().len(), 400);

    let (status, _) = app
        .send_json(authed_request(
            Method::POST,
            CONTENT,
            &token,
            Some(json!({ "title": "t".repeat(301), "link": "https://example.com", "type": "text" })),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_without_body_is_bad_request() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let (status, body) = app
        .send_json(authed_request(Method::DELETE, CONTENT, &token, None))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Content ID is required");
}

#[tokio::test]
async fn test_delete_without_id_is_bad_request() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let (status, body) = app
        .send_json(authed_request(Method::DELETE, CONTENT, &token, Some(json!({}))))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Content ID is required");
}

#[tokio::test]
async fn test_brain_share_stubs() {
    let app = TestApp::new();
    let token = app.login("a@b.com").await;

    let (status, body) = app
        .send_json(authed_request(
            Method::POST,
            "/api/v1/brain/share",
            &token,
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["error"]["code"], "NOT_IMPLEMENTED");

    let (status, _) = app
        .send_json(authed_request(
            Method::GET,
            "/api/v1/brain/some-share-link",
            &token,
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}
