//! REST API client for the RAWG catalog endpoints.
//!
//! Wraps the two read-only endpoints the gateway proxies (`/games` and
//! `/genres`) using [`reqwest`]. Responses are reshaped before being
//! returned, so callers only ever see normalized catalog types.

use std::time::Duration;

use gamevault_core::catalog::{GameSummary, Genre, Page};
use gamevault_core::query::{credential_pairs, UpstreamGamesQuery};

use crate::models::{RawgGame, RawgGenre, RawgPage};
use crate::reshape::{reshape_genre, reshape_page};

/// Public RAWG API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// HTTP client for the RAWG catalog.
#[derive(Clone)]
pub struct RawgApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Errors from the RAWG REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum RawgApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// RAWG returned a non-2xx status code.
    #[error("RAWG API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl RawgApi {
    /// Create a client for the catalog at `base_url`.
    ///
    /// * `api_key` - credential sent as the `key` query parameter; omitted
    ///   from requests when `None`.
    /// * `timeout` - per-request timeout covering connect and body.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RawgApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// List or search games.
    ///
    /// Sends `GET {base}/games` with the query's pairs and reshapes every
    /// returned item.
    pub async fn list_games(
        &self,
        query: &UpstreamGamesQuery,
    ) -> Result<Page<GameSummary>, RawgApiError> {
        let response = self
            .client
            .get(format!("{}/games", self.base_url))
            .query(&query.pairs())
            .send()
            .await?;

        let page: RawgPage<RawgGame> = Self::parse_response(response).await?;
        tracing::debug!(
            count = ?page.count,
            returned = page.results.len(),
            "Fetched games from RAWG",
        );
        Ok(reshape_page(page))
    }

    /// List all genres.
    ///
    /// Sends `GET {base}/genres` with only the credential.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, RawgApiError> {
        let response = self
            .client
            .get(format!("{}/genres", self.base_url))
            .query(&credential_pairs(self.api_key()))
            .send()
            .await?;

        let page: RawgPage<RawgGenre> = Self::parse_response(response).await?;
        Ok(page.results.into_iter().map(reshape_genre).collect())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`RawgApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RawgApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RawgApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RawgApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
