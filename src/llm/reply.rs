//! Model reply parsing: fence stripping and lenient JSON extraction.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

fn fence_pattern() -> Option<&'static Regex> {
    static FENCE: OnceLock<Option<Regex>> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").ok())
        .as_ref()
}

/// Return the content of the first fenced code block, or the raw text.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences.
pub fn strip_code_fences(text: &str) -> &str {
    let captured = fence_pattern()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1));
    match captured {
        Some(inner) => inner.as_str(),
        None => text,
    }
}

/// Parse a model reply into a JSON object.
///
/// Anything that is not a JSON object (invalid JSON, an array, a bare
/// string) becomes an empty object so normalization fills every field.
pub fn parse_reply(text: &str) -> Map<String, Value> {
    let json_str = strip_code_fences(text);
    match serde_json::from_str::<Value>(json_str) {
        Ok(Value::Object(obj)) => obj,
        Ok(other) => {
            log::warn!("[LLM] Reply is JSON but not an object ({}) — using defaults", kind(&other));
            Map::new()
        }
        Err(e) => {
            log::warn!(
                "[LLM] Failed to parse reply: {} — raw: {}",
                e,
                &text[..floor_char_boundary(text, 200)]
            );
            Map::new()
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Largest index `<= max` that sits on a char boundary of `text`.
pub(crate) fn floor_char_boundary(text: &str, max: usize) -> usize {
    if max >= text.len() {
        return text.len();
    }
    (0..=max).rev().find(|i| text.is_char_boundary(*i)).unwrap_or(0)
}
