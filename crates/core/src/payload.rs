//! Request payload rules shared by every resource.
//!
//! - Create requires a JSON object containing every mandatory key. Presence is
//!   all that is checked here; a `null` value still counts as present.
//! - Update only applies keys whose value is truthy. `null`, `false`, `0`,
//!   `""`, `[]` and `{}` are treated as if the key had been omitted, so a
//!   PATCH cannot set a field to an empty or zero value.

use serde_json::{Map, Value};

use crate::error::CoreError;

/// A decoded JSON object body.
pub type JsonObject = Map<String, Value>;

/// Decode a create body. Anything other than a JSON object is unprocessable.
pub fn parse_object(body: &[u8]) -> Result<JsonObject, CoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CoreError::Unprocessable("request body is required".into()));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CoreError::Unprocessable(
            "request body must be a JSON object".into(),
        )),
        Err(e) => Err(CoreError::Unprocessable(format!("malformed JSON: {e}"))),
    }
}

/// Decode an update body.
///
/// An empty body or a non-object document carries no fields and yields an
/// empty object. Malformed JSON is still unprocessable.
pub fn parse_patch(body: &[u8]) -> Result<JsonObject, CoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonObject::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(JsonObject::new()),
        Err(e) => Err(CoreError::Unprocessable(format!("malformed JSON: {e}"))),
    }
}

/// Fail with [`CoreError::Unprocessable`] naming the first missing key.
pub fn require_fields(body: &JsonObject, fields: &[&str]) -> Result<(), CoreError> {
    match fields.iter().find(|f| !body.contains_key(**f)) {
        Some(missing) => Err(CoreError::Unprocessable(format!(
            "missing required field `{missing}`"
        ))),
        None => Ok(()),
    }
}

/// Loose truthiness: empty, zero, false and null values are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Keep only the listed keys whose values are truthy.
pub fn truthy_fields(body: JsonObject, fields: &[&str]) -> JsonObject {
    body.into_iter()
        .filter(|(key, value)| fields.contains(&key.as_str()) && is_truthy(value))
        .collect()
}
