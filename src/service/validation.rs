//! Request body validation: required fields, typed field decoding, timestamps, level range.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const NAME_MAX_LEN: usize = 100;
pub const SHORT_TEXT_MAX_LEN: usize = 50;
pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 20;

pub struct RequestValidator;

impl RequestValidator {
    /// Every listed field must be present and non-null. Reports the first missing field in list order.
    pub fn require(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        for field in fields {
            match body.get(*field) {
                None | Some(Value::Null) => return Err(AppError::missing_field(field)),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Level must be a JSON integer in 1..=20. Only enforced on update.
    pub fn level(value: &Value) -> Result<i32, AppError> {
        match value.as_i64() {
            Some(level) if (MIN_LEVEL..=MAX_LEVEL).contains(&level) => Ok(level as i32),
            _ => Err(AppError::BadRequest(format!(
                "Level must be between {} and {}",
                MIN_LEVEL, MAX_LEVEL
            ))),
        }
    }
}

/// Decode one field value into `T`; a type mismatch is a client error naming the field.
pub fn decode<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T, AppError> {
    serde_json::from_value(value.clone()).map_err(|_| AppError::invalid_field(field))
}

/// Decode a field if present. Absent fields yield `default`; present fields (including null) are decoded.
pub fn decode_or<T: DeserializeOwned>(body: &Map<String, Value>, field: &str, default: T) -> Result<T, AppError> {
    match body.get(field) {
        Some(v) => decode(field, v),
        None => Ok(default),
    }
}

/// Text with a maximum length in characters, matching the column size.
pub fn bounded_text(field: &str, value: &Value, max: usize) -> Result<String, AppError> {
    let s: String = decode(field, value)?;
    check_length(field, &s, max)?;
    Ok(s)
}

pub fn optional_bounded_text(field: &str, value: &Value, max: usize) -> Result<Option<String>, AppError> {
    let s: Option<String> = decode(field, value)?;
    if let Some(ref s) = s {
        check_length(field, s, max)?;
    }
    Ok(s)
}

fn check_length(field: &str, s: &str, max: usize) -> Result<(), AppError> {
    if s.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Campaign names must be non-empty after trimming.
pub fn non_empty_name(value: &Value) -> Result<String, AppError> {
    let name = bounded_text("name", value, NAME_MAX_LEN)?;
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    Ok(name)
}

pub fn timestamp_field(field: &str, value: &Value) -> Result<DateTime<Utc>, AppError> {
    let raw = value.as_str().ok_or_else(|| AppError::invalid_field(field))?;
    parse_timestamp(raw)
}

/// ISO-8601 timestamp. A trailing `Z` is rewritten to `+00:00` before parsing; values without an
/// offset are taken as UTC and a bare date means midnight UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let normalized = match raw.strip_suffix('Z') {
        Some(head) => format!("{}+00:00", head),
        None => raw.to_string(),
    };
    let s = normalized.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(AppError::BadRequest(format!("Invalid date format: {}", raw)))
}
