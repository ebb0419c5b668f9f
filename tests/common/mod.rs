//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight into the router through `tower::ServiceExt::oneshot`; no listener is bound.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use dnd_companion::{app, AppState, ServerConfig, Store};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// Full application over the given pool, after schema creation and seeding (as at start-up).
pub async fn build_test_app(pool: PgPool) -> Router {
    let store = Store::new(pool);
    store.initialize().await.expect("store initializes");
    app(AppState::new(store, ServerConfig::default()))
}

/// Application whose pool never connects. Only for routes that do not touch the store.
pub fn build_offline_app() -> Router {
    build_offline_app_with(ServerConfig::default())
}

pub fn build_offline_app_with(config: ServerConfig) -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .expect("lazy pool from a valid url");
    app(AppState::new(Store::new(pool), config))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    send_raw(app, method, uri, body.to_string()).await
}

/// Send `body` verbatim with a JSON content type, whether or not it parses.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

/// Id of the campaign inserted by start-up seeding.
pub async fn seed_campaign_id(app: &Router) -> i64 {
    let campaigns = body_json(get(app, "/campaigns").await).await;
    campaigns[0]["id"].as_i64().expect("seed campaign present")
}

/// POST and return the created entity's JSON, asserting 201.
pub async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
