//! Game detail modal: content and close gestures.

use crate::catalog::GameSummary;
use crate::view::{group_thousands, rating_badge, NONE_LISTED};

/// Minimum downward swipe distance, in pixels, that closes the modal.
pub const SWIPE_CLOSE_THRESHOLD_PX: f64 = 60.0;

/// Key that closes the modal.
pub const CLOSE_KEY: &str = "Escape";

/// A badge in the modal's meta row.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: String,
    /// Rating badges are styled differently from the rest.
    pub is_rating: bool,
}

/// A titled list of names (genres, tags, platforms).
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub items: Vec<String>,
}

impl DetailSection {
    fn new(items: &[String]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Entries to render; a single placeholder when the section is empty.
    pub fn display_items(&self) -> Vec<&str> {
        if self.items.is_empty() {
            vec![NONE_LISTED]
        } else {
            self.items.iter().map(String::as_str).collect()
        }
    }
}

/// Everything the detail modal shows for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub image: Option<String>,
    pub title: String,
    pub badges: Vec<Badge>,
    pub genres: DetailSection,
    pub tags: DetailSection,
    pub platforms: DetailSection,
}

impl DetailView {
    pub fn new(game: &GameSummary) -> Self {
        let mut badges = Vec::new();
        if let Some(text) = rating_badge(game.rating) {
            badges.push(Badge {
                text,
                is_rating: true,
            });
        }
        if let Some(released) = game.released.as_deref().filter(|r| !r.is_empty()) {
            badges.push(Badge {
                text: format!("📅 {released}"),
                is_rating: false,
            });
        }
        if let Some(count) = game.ratings_count.filter(|c| *c != 0) {
            badges.push(Badge {
                text: format!("💬 {} ratings", group_thousands(count)),
                is_rating: false,
            });
        }

        Self {
            image: game.background_image.clone(),
            title: game.display_name().to_string(),
            badges,
            genres: DetailSection::new(&game.genres),
            tags: DetailSection::new(&game.tags),
            platforms: DetailSection::new(&game.platforms),
        }
    }
}

/// Input events the modal reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalInput {
    CloseButton,
    /// A click on the overlay; `on_backdrop` is false when the click landed
    /// inside the panel.
    OverlayClick { on_backdrop: bool },
    Key(String),
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
}

/// Open/closed state of the detail modal.
#[derive(Debug, Default)]
pub struct ModalState {
    open: Option<DetailView>,
    touch_start_y: f64,
}

impl ModalState {
    pub fn open(&mut self, game: &GameSummary) -> &DetailView {
        self.open.insert(DetailView::new(game))
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&DetailView> {
        self.open.as_ref()
    }

    /// Apply an input event. Returns `true` when the event closed the modal.
    pub fn handle(&mut self, input: ModalInput) -> bool {
        let closes = match input {
            ModalInput::CloseButton => true,
            ModalInput::OverlayClick { on_backdrop } => on_backdrop,
            ModalInput::Key(key) => key == CLOSE_KEY,
            ModalInput::TouchStart { y } => {
                self.touch_start_y = y;
                false
            }
            ModalInput::TouchEnd { y } => y - self.touch_start_y > SWIPE_CLOSE_THRESHOLD_PX,
        };

        if closes && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}
