use chrono::{DateTime, Utc};
use serde_aux::field_attributes::deserialize_string_from_number;

/// Identifier the API assigns to a tourist on creation.
///
/// The API may send it as a JSON number; it is kept as its decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TouristId(#[serde(deserialize_with = "deserialize_string_from_number")] String);

impl TouristId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for TouristId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TouristId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Payload of `POST /api/Tourist`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NewTourist {
    pub tourist_name: String,
    pub tourist_email: String,
    pub tourist_location: String,
    pub createdat: DateTime<Utc>,
}
