//! Resource routes: a collection and an item path per entity, plus dice rolling.

use crate::handlers::{campaign, character, dice, monster, session};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/monsters", get(monster::list).post(monster::create))
        .route(
            "/monsters/:id",
            get(monster::read).put(monster::update).delete(monster::delete),
        )
        .route("/characters", get(character::list).post(character::create))
        .route(
            "/characters/:id",
            get(character::read).put(character::update).delete(character::delete),
        )
        .route("/campaigns", get(campaign::list).post(campaign::create))
        .route(
            "/campaigns/:id",
            get(campaign::read).put(campaign::update).delete(campaign::delete),
        )
        .route("/sessions", get(session::list).post(session::create))
        .route(
            "/sessions/:id",
            get(session::read).put(session::update).delete(session::delete),
        )
        .route("/roll", post(dice::roll))
        .with_state(state)
}
