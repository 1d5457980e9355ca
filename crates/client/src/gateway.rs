//! HTTP client for the GameVault gateway.
//!
//! [`GameSource`] is the seam the controller fetches through; the
//! [`GatewayClient`] implementation talks to `/api/games` and `/api/genres`
//! using [`reqwest`]. No request is ever retried.

use async_trait::async_trait;
use gamevault_core::catalog::{GameSummary, Genre, Page};
use gamevault_core::query::BrowseQuery;

/// Errors from fetching through the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The task running the fetch panicked or was aborted.
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Something the browsing client can fetch games and genres from.
#[async_trait]
pub trait GameSource: Send + Sync {
    async fn list_games(&self, query: &BrowseQuery) -> Result<Page<GameSummary>, GatewayError>;

    async fn list_genres(&self) -> Result<Vec<Genre>, GatewayError>;
}

/// [`GameSource`] backed by a running gateway.
#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// * `base_url` - gateway origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GameSource for GatewayClient {
    async fn list_games(&self, query: &BrowseQuery) -> Result<Page<GameSummary>, GatewayError> {
        self.get_json("/api/games", &query.pairs()).await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, GatewayError> {
        self.get_json("/api/genres", &[]).await
    }
}
