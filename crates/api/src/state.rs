use std::sync::Arc;

use gamevault_rawg::RawgApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing in it is mutable: each request is handled independently.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream catalog client (shares one connection pool).
    pub rawg: RawgApi,
}

impl AppState {
    /// Build state from configuration, creating the upstream client.
    pub fn from_config(config: ServerConfig) -> Result<Self, gamevault_rawg::RawgApiError> {
        let rawg = RawgApi::new(
            config.rawg.base_url.clone(),
            config.rawg.api_key.clone(),
            config.upstream_timeout(),
        )?;
        Ok(Self {
            config: Arc::new(config),
            rawg,
        })
    }
}
