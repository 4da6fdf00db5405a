//! End-to-end tests for the ingest API
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot` and
//! asserts on the exact envelope contract the dashboard client depends on.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use threatlens::create_router;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn root_is_informational() {
    let (status, body) = send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ThreatLens triage service is running");
}

#[tokio::test]
async fn email_ingest_returns_envelope() {
    let payload = json!({
        "sender": "a@b.com",
        "subject": "Urgent Action Required",
        "body": "click the link now"
    });
    let (status, body) = send(post_json("/ingest/email", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "email");
    // Raw count of 1 already clears the HIGH threshold
    assert_eq!(body["risk_score"], "HIGH");
    assert_eq!(body["details"]["score"], 1.0);
    assert_eq!(
        body["details"]["indicators"],
        json!(["Scam-like language detected"])
    );
}

#[tokio::test]
async fn clean_email_is_low_risk() {
    let payload = json!({
        "sender": "alice@example.com",
        "subject": "lunch",
        "body": "see you at noon"
    });
    let (status, body) = send(post_json("/ingest/email", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_score"], "LOW");
    assert_eq!(body["details"]["score"], 0.0);
    assert_eq!(body["details"]["indicators"], json!([]));
}

#[tokio::test]
async fn url_ingest_returns_envelope() {
    let (status, body) = send(post_json("/ingest/url", json!({"url": "https://bit.ly/abc"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "url");
    assert_eq!(body["risk_score"], "HIGH");
    assert_eq!(
        body["details"]["indicators"],
        json!(["URL shortener detected"])
    );
}

#[tokio::test]
async fn log_ingest_returns_envelope() {
    let payload = json!({
        "timestamp": "t",
        "user": "root",
        "event": "failed login from 8.8.8.8"
    });
    let (status, body) = send(post_json("/ingest/log", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "log");
    assert_eq!(body["risk_score"], "HIGH");
    assert_eq!(body["details"]["score"], 1.0);
    assert_eq!(
        body["details"]["indicators"],
        json!([
            "Suspicious activity under privileged account",
            "Found keyword: failed login",
            "IP detected: 8.8.8.8",
            "External IP detected: 8.8.8.8",
        ])
    );
}

#[tokio::test]
async fn log_path_reaches_medium() {
    // Two stacked keyword hits: 2 * 0.25 = 0.5
    let payload = json!({
        "timestamp": "t",
        "user": "bob",
        "event": "privilege escalation attempt"
    });
    let (_, body) = send(post_json("/ingest/log", payload)).await;
    assert_eq!(body["risk_score"], "MEDIUM");
    assert_eq!(body["details"]["score"], 0.5);
}

#[tokio::test]
async fn log_path_reaches_low() {
    let payload = json!({
        "timestamp": "t",
        "user": "bob",
        "event": "denied"
    });
    let (_, body) = send(post_json("/ingest/log", payload)).await;
    assert_eq!(body["risk_score"], "LOW");
    assert_eq!(body["details"]["score"], 0.25);
}

#[tokio::test]
async fn missing_field_is_rejected_before_analysis() {
    // "body" is required for email payloads
    let payload = json!({"sender": "a@b.com", "subject": "hi"});
    let (status, body) = send(post_json("/ingest/email", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("body"));
}

#[tokio::test]
async fn mistyped_field_is_rejected() {
    let (status, body) = send(post_json("/ingest/url", json!({"url": 5}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/ingest/log")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let (status, body) = send(get("/ingest/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert!(body["error"].as_str().unwrap().contains("/ingest/nope"));
}
