//! ContactPoint - Email and phone section of a filing

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contact details attached to an application.
///
/// Fields the backend left out stay out on output; anything beyond email
/// and phone is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactPoint {
    /// The empty-but-present contact point used by normalization.
    pub fn blank() -> Self {
        Self {
            email: Some(String::new()),
            phone: Some(String::new()),
            extra: Map::new(),
        }
    }
}

impl From<ContactPoint> for Value {
    fn from(cp: ContactPoint) -> Self {
        let mut map = cp.extra;
        if let Some(email) = cp.email {
            map.insert("email".to_string(), Value::String(email));
        }
        if let Some(phone) = cp.phone {
            map.insert("phone".to_string(), Value::String(phone));
        }
        Value::Object(map)
    }
}
