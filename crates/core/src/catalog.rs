//! Catalog data model returned by the gateway (PRD-01).
//!
//! These are the normalized shapes: the upstream wire format is reshaped into
//! them by `gamevault-rawg`, serialized by the gateway and deserialized again
//! by the browsing client.

use serde::{Deserialize, Serialize};

use crate::types::{CatalogId, ResultCount};

/// Path segment every upstream media URL contains.
pub const MEDIA_SEGMENT: &str = "/media/";

/// Replacement segment requesting the 1280px-wide resize variant.
pub const RESIZED_MEDIA_SEGMENT: &str = "/media/resize/1280/-/";

/// Maximum number of tags kept per game.
pub const MAX_TAGS: usize = 6;

/// A single game as presented to the client.
///
/// Scalars are nullable: an upstream item missing a scalar passes through as
/// `null` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: Option<CatalogId>,
    pub name: Option<String>,
    pub slug: Option<String>,
    /// ISO date (`YYYY-MM-DD`), passed through verbatim.
    pub released: Option<String>,
    /// 0.0 - 5.0.
    pub rating: Option<f64>,
    pub ratings_count: Option<i64>,
    /// Already rewritten to the resize variant.
    pub background_image: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl GameSummary {
    /// Display name, empty when upstream sent none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A genre entry from `GET /api/genres`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: Option<CatalogId>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// The `{ count, next, results }` page envelope.
///
/// `count` is the upstream's reported total and is never recomputed locally.
/// `next` is an opaque continuation indicator; only its presence matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: ResultCount,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the upstream reported another page.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Rewrite a media URL to request the fixed resize variant.
///
/// Only the first `/media/` segment is replaced. Absent or empty URLs yield
/// `None`; URLs without the segment are returned unchanged.
///
/// # Examples
///
/// ```
/// use gamevault_core::catalog::resize_media_url;
/// assert_eq!(
///     resize_media_url(Some("https://x/media/foo.jpg")),
///     Some("https://x/media/resize/1280/-/foo.jpg".to_string())
/// );
/// assert_eq!(resize_media_url(None), None);
/// assert_eq!(resize_media_url(Some("")), None);
/// ```
pub fn resize_media_url(url: Option<&str>) -> Option<String> {
    url.filter(|u| !u.is_empty())
        .map(|u| u.replacen(MEDIA_SEGMENT, RESIZED_MEDIA_SEGMENT, 1))
}
