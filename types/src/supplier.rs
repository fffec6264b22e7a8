use serde::{Deserialize, Serialize};

use crate::error::{DraftError, required};
use crate::lenient;
use crate::search::{Searchable, matches_any};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
}

impl Searchable for Supplier {
    fn matches(&self, query: &str) -> bool {
        matches_any(query, &[&self.name, &self.email])
    }
}

/// Request body for `POST /suppliers`. Sent as typed, no parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub name: String,
    pub email: String,
}

impl SupplierDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        Ok(())
    }
}
