//! Response helpers. Entities are returned bare (no envelope); errors use `{"error": ...}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

/// 204 with a confirmation message. hyper drops the body on the wire for this status.
pub fn deleted(kind: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::NO_CONTENT,
        Json(MessageBody {
            message: format!("{} deleted successfully", kind),
        }),
    )
}
