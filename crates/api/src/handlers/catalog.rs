//! Handlers for the proxied catalog endpoints.
//!
//! Both are read-only and stateless: identical requests against an unchanged
//! upstream produce identical responses.

use axum::extract::{Query, State};
use axum::Json;
use gamevault_core::catalog::{GameSummary, Genre, Page};
use gamevault_core::query::ListGamesParams;

use crate::error::{AppError, AppResult, UpstreamResource};
use crate::state::AppState;

/// GET /api/games
///
/// Lists or searches games. Parameters are defaulted, never validated; empty
/// `search`, `genres` and `tags` are not forwarded upstream.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<ListGamesParams>,
) -> AppResult<Json<Page<GameSummary>>> {
    let query = params.into_upstream(state.rawg.api_key());

    let page = state
        .rawg
        .list_games(&query)
        .await
        .map_err(AppError::upstream(UpstreamResource::Games))?;

    tracing::debug!(
        search = ?query.search,
        genres = ?query.genres,
        page = %query.page,
        results = page.results.len(),
        "Games listed",
    );

    Ok(Json(page))
}

/// GET /api/genres
///
/// Lists genres in upstream order.
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state
        .rawg
        .list_genres()
        .await
        .map_err(AppError::upstream(UpstreamResource::Genres))?;

    tracing::debug!(count = genres.len(), "Genres listed");

    Ok(Json(genres))
}
