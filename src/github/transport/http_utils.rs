//! Shared HTTP helpers for the Octocrab transport.

use http::header::HeaderValue;
use serde_json::Value;

use crate::github::error::ActivityError;

pub(super) fn header_to_string(header_value: Option<&HeaderValue>) -> Option<String> {
    header_value
        .and_then(|raw| raw.to_str().ok())
        .map(ToOwned::to_owned)
}

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

/// Decodes a listing body into its array elements.
///
/// An empty or `null` body is an empty listing; anything other than a JSON
/// array is malformed.
pub(super) fn decode_items(body: &str) -> Result<Vec<Value>, ActivityError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(Value::Null) => Ok(Vec::new()),
        Ok(other) => Err(ActivityError::MalformedResponse {
            message: format!("expected a JSON array, found {}", json_kind(&other)),
        }),
        Err(error) => Err(ActivityError::MalformedResponse {
            message: format!("response deserialisation failed: {error}"),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
