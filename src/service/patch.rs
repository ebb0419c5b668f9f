//! Partial updates: copy supplied body fields onto a loaded entity before it is written back.

use crate::error::AppError;
use serde_json::{Map, Value};

pub trait Patch {
    /// Assign one field from its JSON value. Returns `Ok(false)` when the entity has no
    /// writable field by that name.
    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, AppError>;
}

/// Which body keys a PUT may touch.
#[derive(Clone, Copy, Debug)]
pub enum Fields<'a> {
    /// Only these fields, in this order; other keys are ignored.
    Only(&'a [&'a str]),
    /// Every supplied key the entity knows how to assign.
    Any,
}

/// Apply the body onto `target` and return the names of the fields that changed.
/// On error `target` may be half-written; callers discard it and never persist.
pub fn apply<T: Patch>(target: &mut T, body: &Map<String, Value>, fields: Fields<'_>) -> Result<Vec<String>, AppError> {
    let mut applied = Vec::new();
    match fields {
        Fields::Only(allowed) => {
            for field in allowed {
                if let Some(value) = body.get(*field) {
                    if target.assign(field, value)? {
                        applied.push(field.to_string());
                    }
                }
            }
        }
        Fields::Any => {
            for (field, value) in body {
                if target.assign(field, value)? {
                    applied.push(field.clone());
                } else {
                    tracing::debug!(field = %field, "ignoring field without a writable column");
                }
            }
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Token {
        label: String,
        size: i32,
    }

    impl Patch for Token {
        fn assign(&mut self, field: &str, value: &Value) -> Result<bool, AppError> {
            match field {
                "label" => self.label = crate::service::validation::decode(field, value)?,
                "size" => self.size = crate::service::validation::decode(field, value)?,
                _ => return Ok(false),
            }
            Ok(true)
        }
    }

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn only_touches_allowed_fields() {
        let mut token = Token::default();
        let applied = apply(&mut token, &obj(json!({"label": "goblin", "size": 3})), Fields::Only(&["label"])).unwrap();
        assert_eq!(applied, vec!["label"]);
        assert_eq!(token.label, "goblin");
        assert_eq!(token.size, 0);
    }

    #[test]
    fn any_skips_unknown_keys() {
        let mut token = Token::default();
        let applied = apply(&mut token, &obj(json!({"size": 2, "colour": "red"})), Fields::Any).unwrap();
        assert_eq!(applied, vec!["size"]);
        assert_eq!(token.size, 2);
    }

    #[test]
    fn type_mismatch_is_reported() {
        let mut token = Token::default();
        let err = apply(&mut token, &obj(json!({"size": "huge"})), Fields::Any).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for field: size");
    }
}
