//! Router assembly: common and resource routes behind tracing, body-limit and CORS layers.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::resource_routes;

use crate::state::AppState;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// CORS for the single configured origin, with credentials.
pub fn cors_layer(state: &AppState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
        .allow_credentials(true)
}

/// The full application router.
pub fn app(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(state.config.body_limit_bytes))
        // Cors stays inside the body limit: it needs a `Default` response body.
        .layer(cors_layer(&state));

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(layers)
}
