//! Permissive parsing of base claim documents
//!
//! Test fixtures are often hand written, so documents that are not strict JSON
//! are read as JSON5: comments, unquoted keys, single-quoted strings and
//! trailing commas are accepted. Strict JSON is tried first; integers beyond
//! `i64` only survive that path.

use crate::error::{TokenError, TokenResult};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Parse a claim document into a JSON object.
///
/// # Errors
/// Returns [`TokenError::Parse`] if the bytes are not UTF-8, are not well-formed
/// JSON5, hold a non-finite number, or do not hold an object at the top level.
pub fn parse_claims_document(content: &[u8]) -> TokenResult<Map<String, Value>> {
    let text = std::str::from_utf8(content)
        .map_err(|e| TokenError::Parse(format!("Claims document is not UTF-8: {e}")))?;

    let value = parse_claim_value(text)
        .map_err(|e| TokenError::Parse(format!("Malformed claims document: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(TokenError::Parse(format!(
            "Claims document must be a JSON object, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Parse a single JSON value, falling back to JSON5 when strict JSON fails.
///
/// # Errors
/// Returns [`TokenError::Parse`] if the text is neither JSON nor JSON5, or if
/// it holds `NaN` or an infinity, which have no JSON representation.
pub fn parse_claim_value(text: &str) -> TokenResult<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }
    json5::from_str::<FiniteValue>(text)
        .map(|FiniteValue(value)| value)
        .map_err(|e| TokenError::Parse(e.to_string()))
}

/// JSON value that refuses the non-finite numbers JSON5 can express
struct FiniteValue(Value);

impl<'de> Deserialize<'de> for FiniteValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FiniteVisitor).map(FiniteValue)
    }
}

struct FiniteVisitor;

impl<'de> Visitor<'de> for FiniteVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| E::custom(format!("non-finite number {value} has no JSON form")))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(FiniteValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::new();
        while let Some((key, FiniteValue(value))) = access.next_entry::<String, FiniteValue>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
