use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as the backend returns it. Only `_id` is known; the rest is
/// kept as-is and read opportunistically for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    /// String value of a field, or `None` if absent or not a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field)?.as_str()
    }

    pub fn name(&self) -> &str {
        self.get_str("name")
            .or_else(|| self.get_str("username"))
            .unwrap_or("Unknown")
    }

    pub fn email(&self) -> Option<&str> {
        self.get_str("email")
    }
}
