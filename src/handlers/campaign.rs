//! Campaign handlers. PUT writes any supplied campaign column; DELETE refuses while children exist.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::{DbId, NewCampaign};
use crate::response::{created, deleted, ok, ok_many};
use crate::service::{apply, Fields};
use crate::state::AppState;
use crate::store::CampaignRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

const KIND: &str = "Campaign";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("fetching all campaigns");
    let mut conn = state.store.acquire().await?;
    let campaigns = CampaignRepo::list(&mut conn).await?;
    tracing::info!(count = campaigns.len(), "fetched campaigns");
    Ok(ok_many(campaigns))
}

pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?body, "creating campaign");
    let input = NewCampaign::from_body(&body)?;
    let mut tx = state.store.begin().await?;
    let campaign = CampaignRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id = campaign.id, "created campaign");
    Ok(created(campaign))
}

pub async fn read(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    let campaign = CampaignRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    Ok(ok(campaign))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let mut campaign = CampaignRepo::find_by_id(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    // A missing entity is reported ahead of a malformed body.
    let JsonObject(body) = body?;
    tracing::debug!(id, ?body, "updating campaign");
    let applied = apply(&mut campaign, &body, Fields::Any)?;
    let campaign = CampaignRepo::update(&mut tx, &campaign)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    tx.commit().await?;
    tracing::info!(id, ?applied, "updated campaign");
    Ok(ok(campaign))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    if !CampaignRepo::exists(&mut tx, id).await? {
        return Err(AppError::not_found(KIND, id));
    }
    let (characters, sessions) = CampaignRepo::child_counts(&mut tx, id).await?;
    if characters > 0 || sessions > 0 {
        return Err(AppError::Conflict(format!(
            "Campaign with id {} still has {} character(s) and {} session(s); delete them first",
            id, characters, sessions
        )));
    }
    CampaignRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    tracing::info!(id, "deleted campaign");
    Ok(deleted(KIND))
}
