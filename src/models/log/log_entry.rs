//! Practice attempt as posted by a client.

use serde::{Deserialize, de::Error as _};
use serde_json::Value;

/// One attempt at signing a letter. Keys missing from the request body
/// decode to empty strings and `false`; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub user_id: String,
    pub target_letter: String,
    pub predicted_letter: String,
    pub correct: bool,
    pub timestamp: String,
}

impl LogEntry {
    /// Decode a request body. Only a JSON object is accepted; when a key
    /// repeats, the last value wins.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))),
        }
    }

    /// Persisted form of `correct`: 1 for true, 0 for false.
    pub fn correct_flag(&self) -> i64 {
        if self.correct { 1 } else { 0 }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
