//! Monster: a standalone stat block.

use super::DbId;
use crate::error::AppError;
use crate::service::{bounded_text, decode, decode_or, Patch, RequestValidator, NAME_MAX_LEN};
use serde::Serialize;
use serde_json::{Map, Value};

pub const MUTABLE_FIELDS: &[&str] = &["name", "challenge_rating", "hit_points", "armor_class", "description"];

pub const DEFAULT_CHALLENGE_RATING: f64 = 0.0;
pub const DEFAULT_HIT_POINTS: i32 = 10;
pub const DEFAULT_ARMOR_CLASS: i32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Monster {
    pub id: DbId,
    pub name: String,
    pub challenge_rating: Option<f64>,
    pub hit_points: Option<i32>,
    pub armor_class: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMonster {
    pub name: String,
    pub challenge_rating: Option<f64>,
    pub hit_points: Option<i32>,
    pub armor_class: Option<i32>,
    pub description: Option<String>,
}

impl NewMonster {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["name"])?;
        Ok(NewMonster {
            name: bounded_text("name", &body["name"], NAME_MAX_LEN)?,
            challenge_rating: decode_or(body, "challenge_rating", Some(DEFAULT_CHALLENGE_RATING))?,
            hit_points: decode_or(body, "hit_points", Some(DEFAULT_HIT_POINTS))?,
            armor_class: decode_or(body, "armor_class", Some(DEFAULT_ARMOR_CLASS))?,
            description: decode_or(body, "description", Some(String::new()))?,
        })
    }
}

impl Patch for Monster {
    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, AppError> {
        match field {
            "name" => self.name = bounded_text(field, value, NAME_MAX_LEN)?,
            "challenge_rating" => self.challenge_rating = decode(field, value)?,
            "hit_points" => self.hit_points = decode(field, value)?,
            "armor_class" => self.armor_class = decode(field, value)?,
            "description" => self.description = decode(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn defaults_fill_missing_stats() {
        let new = NewMonster::from_body(&obj(json!({"name": "Goblin"}))).unwrap();
        assert_eq!(new.challenge_rating, Some(0.0));
        assert_eq!(new.hit_points, Some(10));
        assert_eq!(new.armor_class, Some(10));
        assert_eq!(new.description.as_deref(), Some(""));
    }

    #[test]
    fn integer_challenge_rating_is_accepted() {
        let new = NewMonster::from_body(&obj(json!({"name": "Owlbear", "challenge_rating": 3}))).unwrap();
        assert_eq!(new.challenge_rating, Some(3.0));
    }

    #[test]
    fn wrong_type_is_a_client_error() {
        let err = NewMonster::from_body(&obj(json!({"name": "Ogre", "armor_class": "eleven"}))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for field: armor_class");
    }
}
