//! Session: one dated play session of a campaign.

use super::DbId;
use crate::error::AppError;
use crate::service::{decode, timestamp_field, Patch, RequestValidator};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

pub const MUTABLE_FIELDS: &[&str] = &["notes", "date"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Session {
    pub id: DbId,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub campaign_id: DbId,
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub date: DateTime<Utc>,
    pub notes: String,
    pub campaign_id: DbId,
}

impl NewSession {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["campaign_id", "date", "notes"])?;
        Ok(NewSession {
            campaign_id: decode("campaign_id", &body["campaign_id"])?,
            date: timestamp_field("date", &body["date"])?,
            notes: decode("notes", &body["notes"])?,
        })
    }
}

impl Patch for Session {
    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, AppError> {
        match field {
            "notes" => self.notes = decode(field, value)?,
            "date" => self.date = timestamp_field(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
