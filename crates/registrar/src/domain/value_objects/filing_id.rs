//! FilingId - Backend-assigned filing number

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Positive numeric identifier assigned by the backend once a filing exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct FilingId(u64);

impl FilingId {
    /// Returns `None` for zero.
    pub fn new(id: u64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Reads a filing id from a JSON value as the backend sends it.
    ///
    /// Accepts positive integral numbers, either as JSON numbers or as
    /// strings (`9`, `9.0`, `"9"`, `"9.0"`). Zero, negatives, fractions and
    /// anything non-numeric yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().and_then(integral))
                .and_then(Self::new),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
                    .and_then(Self::new)
            }
            _ => None,
        }
    }

    /// Lenient deserializer for header fields; invalid values read as absent.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Self::from_value))
    }
}

fn integral(f: f64) -> Option<u64> {
    (f.fract() == 0.0 && f > 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

impl TryFrom<u64> for FilingId {
    type Error = String;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| "Filing id must be positive".to_string())
    }
}

impl From<FilingId> for u64 {
    fn from(id: FilingId) -> Self {
        id.0
    }
}

impl std::fmt::Display for FilingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FilingId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(&Value::String(s.to_string()))
            .ok_or_else(|| format!("Invalid filing id: {}", s))
    }
}
