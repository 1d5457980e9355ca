//! Upstream wire format.
//!
//! Every field is optional or defaulted: a malformed upstream item is
//! reshaped as far as possible instead of failing the whole page.

use serde::Deserialize;

/// Listing response from `GET /games`.
#[derive(Debug, Deserialize)]
pub struct RawgPage<T> {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Any nested `{ name, ... }` object (genre, tag, platform).
#[derive(Debug, Deserialize)]
pub struct RawgNamed {
    #[serde(default)]
    pub name: Option<String>,
}

/// An entry of a game's `platforms` array: `{ platform: { name } }`.
#[derive(Debug, Deserialize)]
pub struct RawgPlatformEntry {
    #[serde(default)]
    pub platform: Option<RawgNamed>,
}

/// A game item from the listing.
#[derive(Debug, Deserialize)]
pub struct RawgGame {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub ratings_count: Option<i64>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<RawgNamed>>,
    #[serde(default)]
    pub tags: Option<Vec<RawgNamed>>,
    #[serde(default)]
    pub platforms: Option<Vec<RawgPlatformEntry>>,
}

/// A genre item from `GET /genres`.
#[derive(Debug, Deserialize)]
pub struct RawgGenre {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}
