//! UI events the browsing controller reacts to.

use gamevault_core::detail::ModalInput;
use gamevault_core::session::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The search box changed. Applied after the debounce interval.
    SearchInput(String),
    /// The search box's clear control was pressed.
    SearchClear,
    /// A genre filter pill was selected; an empty slug means all genres.
    GenreSelected { slug: String, label: Option<String> },
    /// A bottom navigation tab was selected.
    TabSelected(Tab),
    /// The "load more" control was pressed.
    LoadMore,
    /// A card was selected, by its index in the accumulated results.
    CardSelected(usize),
    /// Input aimed at the detail modal.
    Modal(ModalInput),
}
