//! Session handlers. Listing is newest-first with an optional `campaign_id` filter.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::session::MUTABLE_FIELDS;
use crate::models::{DbId, NewSession};
use crate::response::{created, deleted, ok, ok_many};
use crate::service::{apply, Fields};
use crate::state::AppState;
use crate::store::{CampaignRepo, SessionRepo};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

const KIND: &str = "Session";

#[derive(Debug, Default, Deserialize)]
pub struct SessionListParams {
    pub campaign_id: Option<String>,
}

impl SessionListParams {
    /// An empty `campaign_id` means no filter.
    fn campaign_filter(&self) -> Result<Option<DbId>, AppError> {
        match self.campaign_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| AppError::invalid_field("campaign_id")),
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SessionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let campaign_id = params.campaign_filter()?;
    tracing::debug!(?campaign_id, "fetching sessions");
    let mut conn = state.store.acquire().await?;
    let sessions = SessionRepo::list(&mut conn, campaign_id).await?;
    tracing::info!(count = sessions.len(), "fetched sessions");
    Ok(ok_many(sessions))
}

pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?body, "creating session");
    let input = NewSession::from_body(&body)?;
    let mut tx = state.store.begin().await?;
    if !CampaignRepo::exists(&mut tx, input.campaign_id).await? {
        return Err(AppError::not_found("Campaign", input.campaign_id));
    }
    let session = SessionRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id = session.id, campaign_id = session.campaign_id, "created session");
    Ok(created(session))
}

pub async fn read(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    let session = SessionRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    Ok(ok(session))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let mut session = SessionRepo::find_by_id(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    // A missing entity is reported ahead of a malformed body.
    let JsonObject(body) = body?;
    tracing::debug!(id, ?body, "updating session");
    apply(&mut session, &body, Fields::Only(MUTABLE_FIELDS))?;
    let session = SessionRepo::update(&mut tx, &session)
        .await?
        .ok_or_else(|| AppError::not_found(KIND, id))?;
    tx.commit().await?;
    tracing::info!(id, "updated session");
    Ok(ok(session))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    if !SessionRepo::delete(&mut tx, id).await? {
        return Err(AppError::not_found(KIND, id));
    }
    tx.commit().await?;
    tracing::info!(id, "deleted session");
    Ok(deleted(KIND))
}
