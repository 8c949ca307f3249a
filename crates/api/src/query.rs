//! Query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Page-number pagination (`?page=`). A missing or empty page means the
/// first one.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
}

/// Treat `?page=` like an absent parameter; anything else must be an integer.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
