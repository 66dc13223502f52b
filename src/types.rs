//! Core types for the items service

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Error, Result};

/// An item in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique item identifier, assigned on creation
    pub id: Uuid,
    /// Display name, the only mutable field
    pub name: String,
}

impl Item {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    /// Whether `raw` is exactly this item's textual id
    pub fn has_id(&self, raw: &str) -> bool {
        let mut buf = Uuid::encode_buffer();
        &*self.id.hyphenated().encode_lower(&mut buf) == raw
    }
}

/// Extract the `name` member from a request body.
///
/// The body must be a JSON object whose `name` is a non-empty string. No
/// trimming is applied.
pub fn validate_name(body: Option<&Value>) -> Result<String> {
    body.and_then(|b| b.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or(Error::InvalidName)
}
