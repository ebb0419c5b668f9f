//! Liveness, health, version and CORS behaviour.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;

#[tokio::test]
async fn test_liveness_reports_message_and_timestamp() {
    let app = common::build_offline_app();
    let response = get(&app, "/test").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "API is working");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_and_version() {
    let app = common::build_offline_app();
    let body = body_json(get(&app, "/health").await).await;
    assert_eq!(body["status"], "ok");

    let body = body_json(get(&app, "/version").await).await;
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test]
async fn test_ready_with_database(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["database"], "ok");
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = common::build_offline_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/monsters")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = common::send(&app, request).await;
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_oversized_body_is_rejected_with_413() {
    let config = dnd_companion::ServerConfig {
        body_limit_bytes: 64,
        ..Default::default()
    };
    let app = common::build_offline_app_with(config);
    let body = serde_json::json!({"dice": "2d6", "padding": "x".repeat(200)}).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/roll")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(body))
        .unwrap();
    let response = common::send(&app, request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let response = common::post_json(&app, "/roll", serde_json::json!({"dice": "1d4"})).await;
    assert_eq!(response.status(), StatusCode::OK);
}
