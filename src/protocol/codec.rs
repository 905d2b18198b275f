//! Protocol codec
//!
//! Encoding and decoding functions for the JSON wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Record;
use crate::error::{CatalogError, Result};

/// Maximum request body size (1 MB)
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

// =============================================================================
// Record Decoding
// =============================================================================

/// JSON keys of a record
const RECORD_FIELDS: [&str; 4] = ["id", "title", "artist", "price"];

/// Decode a record from a request body
///
/// The body must be a JSON object, or `null` (which decodes to an empty
/// record). Keys match field names case-insensitively, with an exact match
/// winning over a folded one. Absent fields take their zero value and
/// unknown fields are ignored. Anything else is a `MalformedPayload`.
pub fn decode_record(bytes: &[u8]) -> Result<Record> {
    if bytes.len() > MAX_PAYLOAD_SIZE {
        return Err(CatalogError::MalformedPayload(format!(
            "payload too large: {} bytes (max {})",
            bytes.len(),
            MAX_PAYLOAD_SIZE
        )));
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| CatalogError::MalformedPayload(e.to_string()))?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Record::default()),
        other => {
            return Err(CatalogError::MalformedPayload(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    Record::deserialize(Value::Object(fold_keys(fields)))
        .map_err(|e| CatalogError::MalformedPayload(e.to_string()))
}

/// Rename keys that match a record field ignoring case
fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut exact = Map::new();
    let mut folded = Map::new();

    for (key, value) in fields {
        if RECORD_FIELDS.contains(&key.as_str()) {
            exact.insert(key, value);
        } else if let Some(field) = RECORD_FIELDS
            .iter()
            .find(|field| key.to_lowercase() == **field)
        {
            folded.insert(field.to_string(), value);
        }
    }

    folded.extend(exact);
    folded
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

// =============================================================================
// Encoding
// =============================================================================

/// Encode a value as indented JSON
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| CatalogError::Serialization(e.to_string()))
}
