//! Campaign: the parent record for characters and sessions.

use super::DbId;
use crate::error::AppError;
use crate::service::{decode, non_empty_name, timestamp_field, Patch, RequestValidator};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Campaign {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    /// Ids of the campaign's characters, derived on read.
    pub characters: Vec<DbId>,
    /// Ids of the campaign's sessions, derived on read.
    pub sessions: Vec<DbId>,
}

#[derive(Debug, Clone)]
pub struct NewCampaign {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to the insert time when absent.
    pub start_date: Option<DateTime<Utc>>,
}

impl NewCampaign {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["name"])?;
        let name = non_empty_name(&body["name"])?;
        let description = match body.get("description") {
            Some(v) => decode("description", v)?,
            None => None,
        };
        let start_date = match body.get("start_date") {
            None | Some(Value::Null) => None,
            Some(v) => Some(timestamp_field("start_date", v)?),
        };
        Ok(NewCampaign {
            name,
            description,
            start_date,
        })
    }
}

/// Any campaign column may be set. `id` and the derived child lists are never written.
impl Patch for Campaign {
    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, AppError> {
        match field {
            "name" => self.name = non_empty_name(value)?,
            "description" => self.description = decode(field, value)?,
            "start_date" => self.start_date = timestamp_field(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
