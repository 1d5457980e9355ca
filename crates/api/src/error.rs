use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamevault_rawg::RawgApiError;
use serde_json::json;

/// The upstream collection a failed request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamResource {
    Games,
    Genres,
}

impl UpstreamResource {
    /// Fixed message returned to the caller. Upstream detail never appears
    /// in it.
    pub fn failure_message(self) -> &'static str {
        match self {
            UpstreamResource::Games => "Failed to fetch games from RAWG.",
            UpstreamResource::Genres => "Failed to fetch genres.",
        }
    }

    /// Gateway route serving this resource, used in logs.
    pub fn route(self) -> &'static str {
        match self {
            UpstreamResource::Games => "/api/games",
            UpstreamResource::Genres => "/api/genres",
        }
    }
}

impl fmt::Display for UpstreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamResource::Games => f.write_str("games"),
            UpstreamResource::Genres => f.write_str("genres"),
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "error": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Any failure talking to the upstream catalog (network, non-2xx,
    /// timeout, undecodable body).
    #[error("Upstream request for {resource} failed: {source}")]
    Upstream {
        resource: UpstreamResource,
        #[source]
        source: RawgApiError,
    },
}

impl AppError {
    pub fn upstream(resource: UpstreamResource) -> impl FnOnce(RawgApiError) -> Self {
        move |source| AppError::Upstream { resource, source }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upstream { resource, source } => {
                tracing::error!(
                    route = resource.route(),
                    error = %source,
                    "Upstream catalog request failed",
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    resource.failure_message(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
