//! NameRequest - Opaque name reservation record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name request data as returned by the backend.
///
/// No structure is assumed beyond being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRequestRecord(Value);

impl NameRequestRecord {
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    /// Top-level field lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level string field lookup
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }
}
