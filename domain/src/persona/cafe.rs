//! Cafe value object — a nearby café suggested for the persona's drink

use serde::{Deserialize, Deserializer, Serialize};

/// A café returned by the maps-grounded search.
///
/// The model writes this as free-form JSON, so optional fields tolerate
/// absence, empty strings and numeric ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    pub name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub open_status: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub maps_url: String,
}

impl Cafe {
    pub fn new(name: impl Into<String>, address: impl Into<String>, maps_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating: None,
            address: address.into(),
            open_status: None,
            maps_url: maps_url.into(),
        }
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_open_status(mut self, status: impl Into<String>) -> Self {
        self.open_status = Some(status.into());
        self
    }
}

/// Strings, numbers and null → `Option<String>`, treating blank as absent
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Like [`optional_text`], with null and non-text values as an empty string
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}
