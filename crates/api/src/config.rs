use std::path::PathBuf;
use std::time::Duration;

use gamevault_rawg::api::DEFAULT_BASE_URL;

/// Upstream catalog settings.
#[derive(Debug, Clone)]
pub struct RawgConfig {
    /// Credential sent as the `key` query parameter. Requests are still
    /// forwarded without it; RAWG will reject them.
    pub api_key: Option<String>,
    /// Catalog base URL (default: `https://api.rawg.io/api`).
    pub base_url: String,
    /// Per-request timeout for upstream calls in seconds (default: `25`).
    /// Clamped below the request timeout, see [`ServerConfig::upstream_timeout`].
    pub timeout_secs: u64,
}

impl RawgConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the browser shell (default: `public`).
    pub static_dir: PathBuf,
    /// Upstream catalog settings.
    pub rawg: RawgConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | any origin                 |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `STATIC_DIR`            | `public`                   |
    /// | `RAWG_API_KEY`          | unset                      |
    /// | `RAWG_BASE_URL`         | `https://api.rawg.io/api`  |
    /// | `UPSTREAM_TIMEOUT_SECS` | `25`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        let api_key = std::env::var("RAWG_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let base_url = std::env::var("RAWG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "25".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            rawg: RawgConfig {
                api_key,
                base_url,
                timeout_secs,
            },
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout applied to upstream calls.
    ///
    /// Always shorter than [`request_timeout`](Self::request_timeout), so a
    /// stalled upstream surfaces as the gateway's own 500 rather than the
    /// router's bare 408.
    pub fn upstream_timeout(&self) -> Duration {
        let request = self.request_timeout();
        let margin = UPSTREAM_TIMEOUT_MARGIN.min(request / 2);
        self.rawg.timeout().min(request - margin)
    }
}

/// Minimum headroom between the upstream timeout and the request timeout.
pub const UPSTREAM_TIMEOUT_MARGIN: Duration = Duration::from_millis(500);

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
