//! Dice rolling. Stateless; never touches the store.

use crate::dice::{DiceError, DiceNotation};
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::response::ok;
use crate::service::RequestValidator;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RollResponse {
    pub rolls: Vec<u32>,
    pub total: u32,
    /// The notation exactly as submitted.
    pub dice: String,
}

pub async fn roll(JsonObject(body): JsonObject) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?body, "rolling dice");
    RequestValidator::require(&body, &["dice"])?;
    let dice = body["dice"].as_str().ok_or(DiceError::InvalidNotation)?;
    let notation: DiceNotation = dice.parse()?;
    let roll = notation.roll(&mut rand::thread_rng());
    tracing::info!(dice, rolls = ?roll.rolls, total = roll.total, "rolled dice");
    Ok(ok(RollResponse {
        rolls: roll.rolls,
        total: roll.total,
        dice: dice.to_string(),
    }))
}
