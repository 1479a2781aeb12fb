//! Request validation for show creation.
//!
//! The checks run in a fixed order and stop at the first failure. Each field
//! is rejected only when it is *both* falsy (absent, null, false, zero, or
//! the empty string) *and* of the wrong JSON type. The two conditions are
//! deliberately combined with AND rather than OR, which admits falsy values
//! of the right type: an empty-string `title` or `time` passes, as does
//! `theatreId: 0`. Callers relying on those acceptance cases exist, so the
//! combination must not be "fixed" to OR.

use serde_json::Value;

use crate::models::NewShow;

pub const TITLE_ERROR: &str = "title is required and should be string";
pub const THEATRE_ID_ERROR: &str = "theatreId is required and should be number";
pub const TIME_ERROR: &str = "time is required and should be string";

/// Validation failure for a creation payload, carrying the plain-text
/// message identifying the first failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(&'static str);

impl ValidationError {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

/// Validate a raw creation payload and extract the typed candidate fields.
///
/// A truthy value of the wrong type (say, a numeric `title`) survives the
/// ordered checks but cannot be represented by [`NewShow`]; extraction
/// rejects it with the same field message.
pub fn validate_new_show(body: &Value) -> Result<NewShow, ValidationError> {
    let title = body.get("title").unwrap_or(&Value::Null);
    if is_falsy(title) && !title.is_string() {
        return Err(ValidationError(TITLE_ERROR));
    }

    let theatre_id = body.get("theatreId").unwrap_or(&Value::Null);
    if is_falsy(theatre_id) && !theatre_id.is_number() {
        return Err(ValidationError(THEATRE_ID_ERROR));
    }

    let time = body.get("time").unwrap_or(&Value::Null);
    if is_falsy(time) && !time.is_string() {
        return Err(ValidationError(TIME_ERROR));
    }

    Ok(NewShow {
        title: title
            .as_str()
            .ok_or(ValidationError(TITLE_ERROR))?
            .to_string(),
        theatre_id: theatre_id.as_i64().ok_or(ValidationError(THEATRE_ID_ERROR))?,
        time: time.as_str().ok_or(ValidationError(TIME_ERROR))?.to_string(),
    })
}

/// JavaScript-style falsiness over the values JSON can express:
/// null, false, numeric zero, and the empty string.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
