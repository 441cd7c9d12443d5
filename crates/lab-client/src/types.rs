//! Wire types for the catalog and user endpoints
//!
//! No schema validation happens here. Every field defaults when it is
//! absent, `null` or of the wrong type, so a sparse or malformed record
//! renders as placeholders instead of failing the whole list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Outer envelope of the movie catalog response: `{ "data": { "movies": [..] } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieEnvelope {
    #[serde(default, deserialize_with = "lenient")]
    pub data: MoviePage,
}

/// The `data` object of the catalog envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoviePage {
    /// Absent or `null` when the catalog has no results
    #[serde(default, deserialize_with = "lenient_list")]
    pub movies: Vec<Movie>,
}

impl MovieEnvelope {
    pub fn into_movies(self) -> Vec<Movie> {
        self.data.movies
    }
}

/// A movie record from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub year: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: f32,
    #[serde(default, deserialize_with = "lenient")]
    pub genres: Vec<String>,
    /// Poster image reference
    #[serde(default, deserialize_with = "lenient")]
    pub medium_cover_image: String,
}

/// A user record from the placeholder API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// Decode a field, falling back to its default on `null` or a type mismatch
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a list, skipping entries that are not records
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| T::deserialize(entry).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
