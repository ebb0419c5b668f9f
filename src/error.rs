//! Typed errors and HTTP mapping.

use crate::dice::DiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        AppError::BadRequest(format!("Missing required field: {}", field))
    }

    pub fn invalid_field(field: &str) -> Self {
        AppError::BadRequest(format!("Invalid value for field: {}", field))
    }

    /// `kind` is the entity name as shown to clients, e.g. "Campaign".
    pub fn not_found(kind: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} with id {} not found", kind, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Dice(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            // Any open transaction has already been dropped (rolled back) by the time we get here.
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
