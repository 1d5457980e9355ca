//! Reshaping of upstream items into the normalized catalog types.

use gamevault_core::catalog::{resize_media_url, GameSummary, Genre, Page, MAX_TAGS};

use crate::models::{RawgGame, RawgGenre, RawgNamed, RawgPage};

/// Names of the given entries, skipping entries without one.
fn names<'a>(entries: impl IntoIterator<Item = &'a RawgNamed>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| entry.name.clone())
        .collect()
}

/// Reshape one upstream game.
///
/// - scalars are copied verbatim;
/// - `background_image` is rewritten to the resize variant;
/// - `genres` and `platforms` keep only names;
/// - `tags` keeps the names of the first [`MAX_TAGS`] entries;
/// - missing arrays become empty.
pub fn reshape_game(game: RawgGame) -> GameSummary {
    let genres = game.genres.unwrap_or_default();
    let tags = game.tags.unwrap_or_default();
    let platforms = game.platforms.unwrap_or_default();

    GameSummary {
        id: game.id,
        name: game.name,
        slug: game.slug,
        released: game.released,
        rating: game.rating,
        ratings_count: game.ratings_count,
        background_image: resize_media_url(game.background_image.as_deref()),
        genres: names(&genres),
        tags: names(tags.iter().take(MAX_TAGS)),
        platforms: names(platforms.iter().filter_map(|p| p.platform.as_ref())),
    }
}

/// Reshape a listing page, copying `count` and `next` verbatim.
pub fn reshape_page(page: RawgPage<RawgGame>) -> Page<GameSummary> {
    Page {
        count: page.count.unwrap_or_default(),
        next: page.next,
        results: page.results.into_iter().map(reshape_game).collect(),
    }
}

pub fn reshape_genre(genre: RawgGenre) -> Genre {
    Genre {
        id: genre.id,
        name: genre.name,
        slug: genre.slug,
    }
}
