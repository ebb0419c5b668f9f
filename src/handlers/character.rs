//! Character handlers. Creation checks the parent campaign; updates range-check `level`.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::character::MUTABLE_FIELDS;
use crate::models::{DbId, NewCharacter};
use crate::response::{created, deleted, ok, ok_many};
use crate::service::{apply, Fields, RequestValidator};
use crate::state::AppState;
use crate::store::{CampaignRepo, CharacterRepo};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

const KIND: &str = "Character";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("fetching all characters");
    let mut conn = state.store.acquire().await?;
    let characters = CharacterRepo::list(&mut conn).await?;
    tracing::info!(count = characters.len(), "fetched characters");
    Ok(ok_many(characters))
}

pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?body, "creating character");
    let input = NewCharacter::from_body(&body)?;
    let mut tx = state.store.begin().await?;
    if !CampaignRepo::exists(&mut tx, input.campaign_id).await? {
        return Err(AppError::not_found("Campaign", input.campaign_id));
    }
    let character = CharacterRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id = character.id, campaign_id = character.campaign_id, "created character");
    Ok(created(character))
}

pub async fn read(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    let character = CharacterRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    Ok(ok(character))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let mut character = CharacterRepo::find_by_id(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    // A missing entity is reported ahead of a malformed body.
    let JsonObject(body) = body?;
    tracing::debug!(id, ?body, "updating character");
    // Rejected before any field is applied.
    if let Some(level) = body.get("level") {
        RequestValidator::level(level)?;
    }
    apply(&mut character, &body, Fields::Only(MUTABLE_FIELDS))?;
    let character = CharacterRepo::update(&mut tx, &character)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    tx.commit().await?;
    tracing::info!(id, "updated character");
    Ok(ok(character))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    if !CharacterRepo::delete(&mut tx, id).await? {
        return Err(AppError::not_found(KIND, id));
    }
    tx.commit().await?;
    tracing::info!(id, "deleted character");
    Ok(deleted(KIND))
}
