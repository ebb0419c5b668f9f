//! HTTP-level tests for POST /roll. No database needed.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

#[tokio::test]
async fn test_roll_returns_rolls_total_and_notation() {
    let app = common::build_offline_app();
    let response = post_json(&app, "/roll", json!({"dice": "3d6"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["dice"], "3d6");
    let rolls: Vec<u64> = body["rolls"].as_array().unwrap().iter().map(|r| r.as_u64().unwrap()).collect();
    assert_eq!(rolls.len(), 3);
    assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    assert_eq!(body["total"].as_u64().unwrap(), rolls.iter().sum::<u64>());
}

#[tokio::test]
async fn test_roll_rejects_bad_notation() {
    let app = common::build_offline_app();
    let cases = [
        ("abc", "Invalid dice notation. Use format: NdM (e.g., 2d6)"),
        ("0d6", "Number of dice must be between 1 and 100"),
        ("101d6", "Number of dice must be between 1 and 100"),
        ("2d1", "Number of sides must be between 2 and 100"),
        ("2d101", "Number of sides must be between 2 and 100"),
    ];
    for (dice, message) in cases {
        let response = post_json(&app, "/roll", json!({"dice": dice})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{dice}");
        assert_eq!(body_json(response).await, json!({"error": message}));
    }
}

#[tokio::test]
async fn test_roll_requires_dice_string() {
    let app = common::build_offline_app();
    let response = post_json(&app, "/roll", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing required field: dice");

    let response = post_json(&app, "/roll", json!({"dice": 6})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid dice notation. Use format: NdM (e.g., 2d6)"
    );
}
