//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for both palindrome endpoints.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, Response, StatusCode},
    Router,
};
use palindrome_store::{create_router, AppState, BoundedExpiringQueue};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

// == Fixtures ==

const CAPACITY: usize = 10;

const PALINDROMES: &[&str] = &[
    "",
    "!\"£$%^&*() ",
    "ée",
    "ГГ",
    "123454321",
    "Dammit I'm mad",
    "Stressed desserts",
    "Race car",
    "Don't nod.",
    "I did, did I?",
    "My gym",
    "Red rum, sir, is murder",
    "Step on no pets",
    "Top spot",
    "Was it a cat I saw?",
    "Eva, can I see bees in a cave?",
    "No lemon, no melon",
    "Able was I ere I saw Elba",
    "A man, a plan, a canal - Panama!",
    "Madam, I'm Adam",
    "Never odd or even",
];

const NON_PALINDROMES: &[&str] = &[
    "123",
    "I need love, love",
    "ooh, ease my mind",
    "And I need to find time",
    "Someone to call mine;",
    "My mama said",
    "You can't hurry love",
    "No, you'll just have to wait",
    "She said love don't come easy",
    "But it's a game of give and take",
    "Just trust in a good time",
    "No matter how long it takes",
];

const BAD_TYPES: &[&str] = &[
    "text/html",
    "multipart/form-data",
    "application/octet-stream",
    "application/json",
    "application/x-www-form-urlencoded",
];

// == Helper Functions ==

fn create_test_app_with(capacity: usize, ttl: Duration) -> Router {
    let queue = BoundedExpiringQueue::new(capacity, ttl);
    create_router(AppState::new(queue))
}

fn create_test_app() -> Router {
    create_test_app_with(CAPACITY, Duration::from_secs(600))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post(app: &Router, content_type: Option<&str>, body: impl Into<Body>) -> Response<Body> {
    let mut request = Request::builder().method("POST").uri("/palindromes");
    if let Some(content_type) = content_type {
        request = request.header(CONTENT_TYPE, content_type);
    }

    app.clone()
        .oneshot(request.body(body.into()).unwrap())
        .await
        .unwrap()
}

async fn post_text(app: &Router, text: &str) -> Value {
    let response = post(app, Some("text/plain"), text.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

async fn list(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/palindromes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// == POST Endpoint Tests ==

#[tokio::test]
async fn test_post_plain_text_returns_json() {
    let app = create_test_app();

    let response = post(&app, Some("text/plain"), Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.contains("json"));
    assert_eq!(body_to_json(response.into_body()).await, json!(true));
}

#[tokio::test]
async fn test_post_plain_text_with_charset() {
    let app = create_test_app();

    let response = post(&app, Some("text/plain; charset=utf-8"), "Top spot").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!(true));
}

#[tokio::test]
async fn test_post_bad_content_types_rejected() {
    let app = create_test_app();

    for content_type in BAD_TYPES {
        let response = post(&app, Some(*content_type), "abba").await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "content type {content_type} should be rejected"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    // Nothing was stored by the rejected requests
    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test]
async fn test_post_missing_content_type_rejected() {
    let app = create_test_app();

    let response = post(&app, None, "abba").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_validates_palindromes() {
    for text in PALINDROMES {
        let app = create_test_app();
        assert_eq!(post_text(&app, text).await, json!(true), "'{text}' is a palindrome");
    }
}

#[tokio::test]
async fn test_post_invalidates_non_palindromes() {
    for text in NON_PALINDROMES {
        let app = create_test_app();
        assert_eq!(post_text(&app, text).await, json!(false), "'{text}' is not a palindrome");
    }
}

#[tokio::test]
async fn test_post_invalid_utf8_is_false() {
    let app = create_test_app();

    let response = post(&app, Some("text/plain"), vec![b'a', 0xff, 0xfe, b'b']).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!(false));
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_returns_json_array() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/palindromes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.contains("json"));
    assert_eq!(body_to_json(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_get_returns_recent_palindromes() {
    // Every prefix of the fixture list, each against a fresh store
    for n in 0..=PALINDROMES.len() {
        let app = create_test_app();
        let posted = &PALINDROMES[..n];

        for text in posted {
            post_text(&app, text).await;
        }

        let expected = &posted[posted.len().saturating_sub(CAPACITY)..];
        assert_eq!(
            list(&app).await,
            json!(expected),
            "expected {}/{} recent palindromes",
            expected.len(),
            n
        );
    }
}

#[tokio::test]
async fn test_get_ignores_non_palindromes() {
    for n in 0..=NON_PALINDROMES.len() {
        let app = create_test_app();

        for text in &NON_PALINDROMES[..n] {
            post_text(&app, text).await;
        }

        assert_eq!(list(&app).await, json!([]), "0/{n} non-palindromes stored");
    }
}

#[tokio::test]
async fn test_get_has_no_side_effects() {
    let app = create_test_app();
    post_text(&app, "Step on no pets").await;

    assert_eq!(list(&app).await, json!(["Step on no pets"]));
    assert_eq!(list(&app).await, json!(["Step on no pets"]));
}

#[tokio::test]
async fn test_stores_are_isolated() {
    let first = create_test_app();
    let second = create_test_app();

    post_text(&first, "My gym").await;

    assert_eq!(list(&first).await, json!(["My gym"]));
    assert_eq!(list(&second).await, json!([]));
}

// == Expiry Tests ==

#[tokio::test(start_paused = true)]
async fn test_ttl_expiration_via_api() {
    let app = create_test_app_with(CAPACITY, Duration::from_millis(100));

    post_text(&app, "").await;
    assert_eq!(list(&app).await, json!([""]));

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test(start_paused = true)]
async fn test_eviction_then_expiry_via_api() {
    let app = create_test_app_with(2, Duration::from_millis(300));

    post_text(&app, "aa").await;
    post_text(&app, "bb").await;
    post_text(&app, "cc").await;
    assert_eq!(list(&app).await, json!(["bb", "cc"]));

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(list(&app).await, json!([]));
}
