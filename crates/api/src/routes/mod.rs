pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET /games     list or search games (paginated)
/// GET /genres    list genres
/// ```
///
/// Unmatched paths fall through to the single-page-app fallback mounted by
/// [`crate::router::build_app_router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(handlers::catalog::list_games))
        .route("/genres", get(handlers::catalog::list_genres))
}
