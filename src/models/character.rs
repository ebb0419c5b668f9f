//! Character: a player character belonging to one campaign.

use super::DbId;
use crate::error::AppError;
use crate::service::{
    bounded_text, decode, decode_or, optional_bounded_text, Patch, RequestValidator, NAME_MAX_LEN, SHORT_TEXT_MAX_LEN,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Fields a PUT may change. `campaign_id` is fixed at creation.
pub const MUTABLE_FIELDS: &[&str] = &["name", "race", "character_class", "level", "hit_points"];

pub const DEFAULT_LEVEL: i32 = 1;
pub const DEFAULT_HIT_POINTS: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub race: Option<String>,
    pub character_class: Option<String>,
    pub level: i32,
    pub hit_points: Option<i32>,
    pub campaign_id: DbId,
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub race: Option<String>,
    pub character_class: Option<String>,
    /// Not range-checked on creation.
    pub level: i32,
    pub hit_points: Option<i32>,
    pub campaign_id: DbId,
}

impl NewCharacter {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["name", "campaign_id"])?;
        let name = bounded_text("name", &body["name"], NAME_MAX_LEN)?;
        let campaign_id: DbId = decode("campaign_id", &body["campaign_id"])?;
        let race = match body.get("race") {
            Some(v) => optional_bounded_text("race", v, SHORT_TEXT_MAX_LEN)?,
            None => Some(String::new()),
        };
        let character_class = match body.get("character_class") {
            Some(v) => optional_bounded_text("character_class", v, SHORT_TEXT_MAX_LEN)?,
            None => Some(String::new()),
        };
        Ok(NewCharacter {
            name,
            race,
            character_class,
            level: decode_or(body, "level", DEFAULT_LEVEL)?,
            hit_points: decode_or(body, "hit_points", Some(DEFAULT_HIT_POINTS))?,
            campaign_id,
        })
    }
}

impl Patch for Character {
    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, AppError> {
        match field {
            "name" => self.name = bounded_text(field, value, NAME_MAX_LEN)?,
            "race" => self.race = optional_bounded_text(field, value, SHORT_TEXT_MAX_LEN)?,
            "character_class" => self.character_class = optional_bounded_text(field, value, SHORT_TEXT_MAX_LEN)?,
            "level" => self.level = RequestValidator::level(value)?,
            "hit_points" => self.hit_points = decode(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
