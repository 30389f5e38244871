//! Meal records from the OpenMensa `/meals` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single dish as delivered by the upstream API.
///
/// Only `category`, `name` and `notes` are interpreted. Everything else
/// (`id`, `prices`, ...) is carried along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub category: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// OpenMensa sends `"notes": null` for some canteens
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MealRecord {
    pub fn new(category: &str, name: &str, notes: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            notes: notes.iter().map(|n| n.to_string()).collect(),
            extra: Map::new(),
        }
    }

    /// Synthetic entry for a menu option that upstream only lists as a note.
    pub fn from_note(category: &str, note: &str) -> Self {
        Self::new(category, note, &[])
    }
}
