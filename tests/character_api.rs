//! HTTP-level tests for /characters.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json, seed_campaign_id};
use serde_json::json;
use sqlx::PgPool;

async fn character_count(app: &axum::Router) -> usize {
    body_json(get(app, "/characters").await).await.as_array().unwrap().len()
}

#[sqlx::test]
async fn test_create_in_seed_campaign(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let campaign_id = seed_campaign_id(&app).await;

    let character = create(
        &app,
        "/characters",
        json!({"name": "Tordek", "race": "Dwarf", "character_class": "Fighter", "campaign_id": campaign_id}),
    )
    .await;
    assert_eq!(character["name"], "Tordek");
    assert_eq!(character["level"], 1);
    assert_eq!(character["hit_points"], 10);
    assert_eq!(character["campaign_id"], campaign_id);

    let campaign = body_json(get(&app, &format!("/campaigns/{campaign_id}")).await).await;
    assert_eq!(campaign["characters"], json!([character["id"]]));
}

#[sqlx::test]
async fn test_create_with_unknown_campaign_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let before = character_count(&app).await;

    let response = post_json(&app, "/characters", json!({"name": "Lost", "campaign_id": 9999})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Campaign with id 9999 not found");
    assert_eq!(character_count(&app).await, before);
}

#[sqlx::test]
async fn test_create_reports_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(&app, "/characters", json!({"campaign_id": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing required field: name");

    let response = post_json(&app, "/characters", json!({"name": "Mialee"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing required field: campaign_id");
}

#[sqlx::test]
async fn test_create_accepts_any_level(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let campaign_id = seed_campaign_id(&app).await;
    let character = create(&app, "/characters", json!({"name": "Lidda", "level": 30, "campaign_id": campaign_id})).await;
    assert_eq!(character["level"], 30);
}

#[sqlx::test]
async fn test_update_rejects_out_of_range_level(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let campaign_id = seed_campaign_id(&app).await;
    let character = create(&app, "/characters", json!({"name": "Jozan", "level": 3, "campaign_id": campaign_id})).await;
    let uri = format!("/characters/{}", character["id"]);

    for level in [0, 21] {
        let response = put_json(&app, &uri, json!({"level": level, "name": "Renamed"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Level must be between 1 and 20");
    }

    let unchanged = body_json(get(&app, &uri).await).await;
    assert_eq!(unchanged, character);
}

#[sqlx::test]
async fn test_update_ignores_campaign_id(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let campaign_id = seed_campaign_id(&app).await;
    let other = create(&app, "/campaigns", json!({"name": "Tomb of Horrors"})).await;
    let character = create(&app, "/characters", json!({"name": "Regdar", "campaign_id": campaign_id})).await;
    let uri = format!("/characters/{}", character["id"]);

    let response = put_json(&app, &uri, json!({"level": 20, "hit_points": 150, "campaign_id": other["id"]})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["level"], 20);
    assert_eq!(updated["hit_points"], 150);
    assert_eq!(updated["campaign_id"], campaign_id);
    assert_eq!(updated["name"], "Regdar");
}

#[sqlx::test]
async fn test_delete_then_fetch_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let campaign_id = seed_campaign_id(&app).await;
    let character = create(&app, "/characters", json!({"name": "Ember", "campaign_id": campaign_id})).await;
    let uri = format!("/characters/{}", character["id"]);

    let response = delete(&app, &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(response).await, json!({"message": "Character deleted successfully"}));
    let response = get(&app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_create_with_blank_campaign_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let before = character_count(&app).await;

    let response = post_json(&app, "/characters", json!({"name": "Nobody", "campaign_id": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid value for field: campaign_id");
    assert_eq!(character_count(&app).await, before);
}
