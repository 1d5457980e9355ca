//! Render-ready view model for the browsing grid.
//!
//! The session mutates a [`GridView`] the same way the page would mutate the
//! DOM; a frontend only has to draw it.

use std::time::Duration;

use crate::catalog::GameSummary;
use crate::types::ResultCount;

/// Number of skeleton placeholders shown while a reset fetch is loading.
pub const SKELETON_COUNT: usize = 10;

/// Stagger between consecutive card entrance animations.
pub const CARD_STAGGER_MS: u64 = 40;

/// Number of genres shown as tags on a card.
pub const CARD_GENRE_LIMIT: usize = 2;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2200);

/// Toast shown when a fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "⚠️ Failed to load games. Check your API key.";

/// Placeholder shown in a detail section with no entries.
pub const NONE_LISTED: &str = "None listed";

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Format a rating badge, e.g. `★ 4.5`. Zero or missing ratings have no badge.
pub fn rating_badge(rating: Option<f64>) -> Option<String> {
    rating
        .filter(|r| *r != 0.0)
        .map(|r| format!("★ {r:.1}"))
}

/// Group an integer's digits in thousands, e.g. `1234567` -> `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// One tile in the game grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    /// Position in the accumulated list; used to open the detail view.
    pub index: usize,
    pub title: String,
    pub image: Option<String>,
    pub rating_badge: Option<String>,
    pub genres: Vec<String>,
    pub animation_delay_ms: u64,
    pub aria_label: String,
}

impl GameCard {
    pub fn new(game: &GameSummary, index: usize) -> Self {
        let title = game.display_name().to_string();
        Self {
            index,
            aria_label: format!("View details for {title}"),
            title,
            image: game.background_image.clone(),
            rating_badge: rating_badge(game.rating),
            genres: game
                .genres
                .iter()
                .take(CARD_GENRE_LIMIT)
                .cloned()
                .collect(),
            animation_delay_ms: index as u64 * CARD_STAGGER_MS,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A short-lived notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }

    pub fn fetch_failed() -> Self {
        Self::new(FETCH_FAILED_MESSAGE)
    }
}

/// Everything the browse page shows outside the detail modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridView {
    pub cards: Vec<GameCard>,
    /// Skeleton placeholders shown instead of cards while resetting.
    pub skeletons: usize,
    pub empty_state: bool,
    pub load_more_visible: bool,
    pub load_more_enabled: bool,
    pub section_label: String,
    /// `"<n> games"`, empty when the count is zero.
    pub section_count: String,
    pub search_clear_visible: bool,
}

impl GridView {
    /// Drop all cards and placeholders.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.skeletons = 0;
    }

    /// Append cards for `games`, numbering them from `start_index`.
    pub fn append(&mut self, games: &[GameSummary], start_index: usize) {
        self.cards.extend(
            games
                .iter()
                .enumerate()
                .map(|(i, game)| GameCard::new(game, start_index + i)),
        );
    }

    /// Update the header for the active filters.
    ///
    /// Search text takes precedence over the genre filter.
    pub fn set_section(
        &mut self,
        search_query: &str,
        active_genre: &str,
        genre_label: Option<&str>,
        total_count: ResultCount,
    ) {
        self.section_label = if !search_query.is_empty() {
            format!("Results for \"{search_query}\"")
        } else if !active_genre.is_empty() {
            genre_label.unwrap_or("Games").to_string()
        } else {
            "Top Rated".to_string()
        };
        self.section_count = if total_count != 0 {
            format!("{} games", group_thousands(total_count))
        } else {
            String::new()
        };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
