//! Query normalization for the games listing (PRD-02).
//!
//! Two directions are covered here:
//!
//! - [`ListGamesParams`] is what the gateway receives from the client and
//!   [`UpstreamGamesQuery`] is what it forwards to the upstream catalog.
//! - [`BrowseQuery`] is what the browsing client sends to the gateway.
//!
//! The gateway performs no validation beyond defaulting: every value is
//! carried as a string and handed to the upstream catalog as-is.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page requested when the client omits `page`.
pub const DEFAULT_PAGE: &str = "1";

/// Page size requested when the client omits `page_size`.
pub const DEFAULT_PAGE_SIZE: &str = "20";

/// Sort order used when the client omits `ordering` (descending rating).
pub const DEFAULT_ORDERING: &str = "-rating";

/// Page size the browsing client always asks for.
pub const BROWSE_PAGE_SIZE: u32 = 20;

// ---------------------------------------------------------------------------
// Gateway side
// ---------------------------------------------------------------------------

/// Query parameters accepted by `GET /api/games`.
///
/// A key that is present but empty (`?page=`) stays `Some("")`; only an
/// absent key falls back to its default.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListGamesParams {
    pub search: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub genres: Option<String>,
    pub tags: Option<String>,
    pub ordering: Option<String>,
}

impl ListGamesParams {
    /// Apply defaults and drop empty filters, producing the upstream query.
    pub fn into_upstream(self, api_key: Option<&str>) -> UpstreamGamesQuery {
        UpstreamGamesQuery {
            key: api_key.map(str::to_string),
            page: self.page.unwrap_or_else(|| DEFAULT_PAGE.into()),
            page_size: self.page_size.unwrap_or_else(|| DEFAULT_PAGE_SIZE.into()),
            ordering: self.ordering.unwrap_or_else(|| DEFAULT_ORDERING.into()),
            search: non_empty(self.search),
            genres: non_empty(self.genres),
            tags: non_empty(self.tags),
        }
    }
}

/// Normalized query for the upstream `games` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamGamesQuery {
    pub key: Option<String>,
    pub page: String,
    pub page_size: String,
    pub ordering: String,
    pub search: Option<String>,
    pub genres: Option<String>,
    pub tags: Option<String>,
}

impl UpstreamGamesQuery {
    /// Query pairs in the fixed upstream order:
    /// `key, page, page_size, ordering, search, genres, tags`.
    ///
    /// Absent values are left out entirely, never sent as empty strings.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(7);
        if let Some(key) = &self.key {
            pairs.push(("key", key.as_str()));
        }
        pairs.push(("page", self.page.as_str()));
        pairs.push(("page_size", self.page_size.as_str()));
        pairs.push(("ordering", self.ordering.as_str()));
        let filters = [
            ("search", &self.search),
            ("genres", &self.genres),
            ("tags", &self.tags),
        ];
        for (name, value) in filters {
            if let Some(value) = value {
                pairs.push((name, value.as_str()));
            }
        }
        pairs
    }
}

/// Query pairs for upstream endpoints that take only the credential.
pub fn credential_pairs(api_key: Option<&str>) -> Vec<(&'static str, &str)> {
    api_key.map(|key| ("key", key)).into_iter().collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Client side
// ---------------------------------------------------------------------------

/// Query the browsing client sends to `GET /api/games`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    pub page: u32,
    pub page_size: u32,
    pub ordering: String,
    pub search: Option<String>,
    pub genres: Option<String>,
}

impl BrowseQuery {
    /// Build the query for `page` under the given filters.
    ///
    /// Empty search text or genre slug is omitted from the query.
    pub fn new(page: u32, search: &str, genre: &str) -> Self {
        Self {
            page,
            page_size: BROWSE_PAGE_SIZE,
            ordering: DEFAULT_ORDERING.to_string(),
            search: (!search.is_empty()).then(|| search.to_string()),
            genres: (!genre.is_empty()).then(|| genre.to_string()),
        }
    }

    /// Query pairs in the order `page, page_size, ordering, search, genres`.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
            ("ordering", self.ordering.clone()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(genres) = &self.genres {
            pairs.push(("genres", genres.clone()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
