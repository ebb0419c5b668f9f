//! Monster handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::monster::MUTABLE_FIELDS;
use crate::models::{DbId, NewMonster};
use crate::response::{created, deleted, ok, ok_many};
use crate::service::{apply, Fields};
use crate::state::AppState;
use crate::store::MonsterRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

const KIND: &str = "Monster";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("fetching all monsters");
    let mut conn = state.store.acquire().await?;
    let monsters = MonsterRepo::list(&mut conn).await?;
    tracing::info!(count = monsters.len(), "fetched monsters");
    Ok(ok_many(monsters))
}

pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?body, "creating monster");
    let input = NewMonster::from_body(&body)?;
    let mut tx = state.store.begin().await?;
    let monster = MonsterRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id = monster.id, "created monster");
    Ok(created(monster))
}

pub async fn read(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    let monster = MonsterRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    Ok(ok(monster))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let mut monster = MonsterRepo::find_by_id(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    // A missing entity is reported ahead of a malformed body.
    let JsonObject(body) = body?;
    tracing::debug!(id, ?body, "updating monster");
    apply(&mut monster, &body, Fields::Only(MUTABLE_FIELDS))?;
    let monster = MonsterRepo::update(&mut tx, &monster)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    tx.commit().await?;
    tracing::info!(id, "updated monster");
    Ok(ok(monster))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    if !MonsterRepo::delete(&mut tx, id).await? {
        return Err(AppError::not_found(KIND, id));
    }
    tx.commit().await?;
    tracing::info!(id, "deleted monster");
    Ok(deleted(KIND))
}
