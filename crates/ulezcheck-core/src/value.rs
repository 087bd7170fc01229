//! Loosely typed field values as they arrive from the TfL endpoints.
//!
//! Upstream fields switch between real booleans, `0`/`1` integers, strings,
//! and `null` without notice, so every leaf is decoded into [`FieldValue`]
//! and nested records are decoded leniently: a wrong shape becomes "absent"
//! instead of failing the whole response.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A single leaf value from an upstream JSON payload.
///
/// Record fields hold `Option<FieldValue>`: `None` means the key was
/// missing, `Some(FieldValue::Null)` means it was present as `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Boolean reading of the value, accepting `0`/`1` integers as flags.
    ///
    /// Any other value is not a flag and returns `None`.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Integer(0) => Some(false),
            FieldValue::Integer(1) => Some(true),
            _ => None,
        }
    }

    /// Loose truthiness: `null`, `false`, zero, and empty strings or
    /// containers are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Integer(n) => *n != 0,
            FieldValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Other(serde_json::Value::Array(items)) => !items.is_empty(),
            FieldValue::Other(serde_json::Value::Object(map)) => !map.is_empty(),
            FieldValue::Other(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Plain-text form: text verbatim, numbers as JSON prints them, anything
/// else as compact JSON.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("None"),
            FieldValue::Bool(true) => f.write_str("True"),
            FieldValue::Bool(false) => f.write_str("False"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Keep `null` as `Some(FieldValue::Null)` rather than collapsing it into
/// `None`. Pair with `#[serde(default)]` so a missing key stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

/// Decode a nested record, treating `null` or a mismatched shape as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}
