//! Integration tests for the health endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, build_test_app, get};
use quillquest_venice::mock::MockProvider;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /api/health returns 200 with a valid, current timestamp
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_timestamp() {
    let mock = Arc::new(MockProvider::new());
    let app = build_test_app(Arc::clone(&mock));

    let before = chrono::Utc::now();
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");

    let timestamp = chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap())
        .expect("timestamp must parse as RFC 3339")
        .with_timezone(&chrono::Utc);
    // Serialized with millisecond precision, so allow sub-second slack.
    assert!(
        timestamp >= before - chrono::Duration::seconds(1),
        "timestamp {timestamp} is earlier than request arrival {before}"
    );

    // The health route never consults the provider.
    assert_eq!(mock.text_calls(), 0);
    assert_eq!(mock.image_calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: unmatched route returns 404 with a plain-text body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_not_found() {
    let app = build_test_app(Arc::new(MockProvider::new()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not Found");
}

// ---------------------------------------------------------------------------
// Test: GET / serves the frontend page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_serves_frontend_page() {
    let app = build_test_app(Arc::new(MockProvider::new()));
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = body_text(response).await;
    assert!(page.contains("QuillQuest"));
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(Arc::new(MockProvider::new()));
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = build_test_app(Arc::new(MockProvider::new()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/prompts")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
