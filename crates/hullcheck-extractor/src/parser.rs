//! Parse LLM output into a raw field mapping

use crate::error::ExtractionError;
use hullcheck_domain::{RawFields, FIELD_NAMES};
use serde_json::Value;
use tracing::error;

/// Strip markdown code fences and surrounding whitespace from a reply
///
/// LLMs sometimes wrap JSON in a "```json" or "```" block despite being told
/// not to. A leading "```json" (or bare "```") and a trailing "```" are
/// removed independently, repeatedly, until the text stops changing, so
/// doubly-fenced replies are handled and clean JSON passes through untouched.
pub fn strip_code_fences(reply: &str) -> &str {
    let mut text = reply.trim();
    loop {
        let mut stripped = text;
        if let Some(rest) = stripped.strip_prefix("```json") {
            stripped = rest;
        } else if let Some(rest) = stripped.strip_prefix("```") {
            stripped = rest;
        }
        if let Some(rest) = stripped.strip_suffix("```") {
            stripped = rest;
        }
        let stripped = stripped.trim();

        if stripped.len() == text.len() {
            return text;
        }
        text = stripped;
    }
}

/// Sanitise a reply and decode it as a flat JSON object
///
/// Does not fill absent fields; see [`fill_missing_fields`].
pub fn decode_reply(reply: &str) -> Result<RawFields, ExtractionError> {
    let json_str = strip_code_fences(reply);

    let value: Value = serde_json::from_str(json_str).map_err(|e| {
        error!("Invalid JSON: {}", json_str);
        ExtractionError::InvalidJson {
            text: json_str.to_string(),
            message: e.to_string(),
        }
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ExtractionError::NotAnObject(json_kind(&other).to_string())),
    }
}

/// Insert `null` for every required field the reply omitted
///
/// Fields already present, including explicit nulls, are left alone.
pub fn fill_missing_fields(fields: &mut RawFields) {
    for name in FIELD_NAMES {
        fields.entry(name).or_insert(Value::Null);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
