//! Browsing session state machine.
//!
//! A [`BrowseSession`] owns everything one browsing session knows: the
//! accumulated results for the current filters, the page counter, the active
//! filters and the in-flight guard. All mutation goes through the operations
//! below; the caller performs the actual HTTP request described by the
//! returned [`FetchRequest`] and reports back through
//! [`BrowseSession::complete`].
//!
//! ```text
//! idle --(reset / next page)--> loading --(success | failure)--> idle
//! ```
//!
//! While loading, every new fetch trigger is dropped. There is no queueing and
//! no preemption: a reset requested during an in-flight next-page fetch does
//! not start.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{GameSummary, Page};
use crate::error::CoreError;
use crate::query::BrowseQuery;
use crate::types::ResultCount;
use crate::view::{GridView, Toast, SKELETON_COUNT};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Categories,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Search => "search",
            Tab::Categories => "categories",
        }
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Tab::Home),
            "search" => Ok(Tab::Search),
            "categories" => Ok(Tab::Categories),
            other => Err(CoreError::Validation(format!("unknown tab '{other}'"))),
        }
    }
}

/// Whether a fetch replaces or extends the accumulated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Discard accumulated results and request page 1.
    Reset,
    /// Append the next page to the accumulated results.
    NextPage,
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fetch the caller must perform and then report via
/// [`BrowseSession::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub kind: FetchKind,
    pub query: BrowseQuery,
}

/// Coarse session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Result of applying a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded { kind: FetchKind, appended: usize },
    Failed { kind: FetchKind, toast: Toast },
}

// ---------------------------------------------------------------------------
// BrowseSession
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct BrowseSession {
    games: Vec<GameSummary>,
    page: u32,
    total_count: ResultCount,
    has_more: bool,
    in_flight: Option<(FetchTicket, FetchKind)>,
    next_ticket: u64,
    active_genre: String,
    active_genre_label: Option<String>,
    search_query: String,
    search_text: String,
    active_tab: Tab,
    view: GridView,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseSession {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            page: 1,
            total_count: 0,
            has_more: false,
            in_flight: None,
            next_ticket: 0,
            active_genre: String::new(),
            active_genre_label: None,
            search_query: String::new(),
            search_text: String::new(),
            active_tab: Tab::Home,
            view: GridView::default(),
        }
    }

    // ---- accessors ----

    pub fn games(&self) -> &[GameSummary] {
        &self.games
    }

    pub fn game(&self, index: usize) -> Option<&GameSummary> {
        self.games.get(index)
    }

    /// Page the next fetch will request.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_count(&self) -> ResultCount {
        self.total_count
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight.map(|(ticket, _)| ticket)
    }

    pub fn active_genre(&self) -> &str {
        &self.active_genre
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Raw contents of the search box (untrimmed, not yet applied).
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn view(&self) -> &GridView {
        &self.view
    }

    // ---- user intents ----

    /// Record a keystroke in the search box. Applying it is debounced by the
    /// caller, see [`apply_search`](Self::apply_search).
    pub fn input_search(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.view.search_clear_visible = !text.is_empty();
    }

    /// Apply debounced search text: trims it, clears the genre filter and
    /// resets.
    pub fn apply_search(&mut self, text: &str) -> Option<FetchRequest> {
        self.search_query = text.trim().to_string();
        self.active_genre.clear();
        self.active_genre_label = None;
        self.reset_and_fetch()
    }

    /// Empty the search box and reset. The genre filter is kept.
    pub fn clear_search(&mut self) -> Option<FetchRequest> {
        self.search_text.clear();
        self.search_query.clear();
        self.view.search_clear_visible = false;
        self.reset_and_fetch()
    }

    /// Activate a genre filter (empty slug = all genres) and reset.
    ///
    /// Selecting a genre clears any search text.
    pub fn select_genre(&mut self, slug: &str, label: Option<&str>) -> Option<FetchRequest> {
        self.active_genre = slug.to_string();
        self.active_genre_label = label.map(str::to_string);
        self.search_query.clear();
        self.search_text.clear();
        self.view.search_clear_visible = false;
        self.reset_and_fetch()
    }

    /// Switch navigation tab. Only [`Tab::Home`] fetches: it clears every
    /// filter and resets.
    pub fn select_tab(&mut self, tab: Tab) -> Option<FetchRequest> {
        self.active_tab = tab;
        match tab {
            Tab::Home => {
                self.search_query.clear();
                self.search_text.clear();
                self.active_genre.clear();
                self.active_genre_label = None;
                self.view.search_clear_visible = false;
                self.reset_and_fetch()
            }
            Tab::Search | Tab::Categories => None,
        }
    }

    /// "Load more": fetch the next page if the last fetch reported one.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        self.fetch_next_page()
    }

    // ---- fetch lifecycle ----

    /// Clear accumulated results and request page 1.
    ///
    /// Returns `None` when a fetch is already in flight.
    pub fn reset_and_fetch(&mut self) -> Option<FetchRequest> {
        self.begin(FetchKind::Reset)
    }

    /// Request the next page.
    ///
    /// Returns `None` when a fetch is already in flight or the last
    /// successful fetch since the most recent reset reported no further page.
    pub fn fetch_next_page(&mut self) -> Option<FetchRequest> {
        if !self.has_more {
            return None;
        }
        self.begin(FetchKind::NextPage)
    }

    fn begin(&mut self, kind: FetchKind) -> Option<FetchRequest> {
        if self.in_flight.is_some() {
            return None;
        }

        if kind == FetchKind::Reset {
            self.page = 1;
            self.has_more = false;
            self.games.clear();
            self.view.clear();
            self.view.skeletons = SKELETON_COUNT;
            self.view.empty_state = false;
            self.view.load_more_visible = false;
        }
        self.view.load_more_enabled = false;

        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some((ticket, kind));

        Some(FetchRequest {
            ticket,
            kind,
            query: BrowseQuery::new(self.page, &self.search_query, &self.active_genre),
        })
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// On success the results are appended, the page counter advances and the
    /// view is updated. On failure a toast is produced; a reset leaves the
    /// grid empty while a next-page failure leaves prior content intact.
    /// Either way the session returns to idle.
    ///
    /// Completing a ticket that is not in flight is rejected without touching
    /// any state.
    pub fn complete<E>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<GameSummary>, E>,
    ) -> Result<FetchOutcome, CoreError> {
        let kind = match self.in_flight {
            Some((current, kind)) if current == ticket => kind,
            _ => return Err(CoreError::StaleFetch { ticket: ticket.id() }),
        };
        self.in_flight = None;
        self.view.load_more_enabled = true;

        let page = match result {
            Ok(page) => page,
            Err(_) => {
                if kind == FetchKind::Reset {
                    self.view.clear();
                }
                return Ok(FetchOutcome::Failed {
                    kind,
                    toast: Toast::fetch_failed(),
                });
            }
        };

        self.total_count = page.count;
        self.has_more = page.has_more();

        let start = self.games.len();
        let appended = page.results.len();
        self.games.extend(page.results);

        if kind == FetchKind::Reset {
            self.view.clear();
        }
        if self.games.is_empty() {
            self.view.empty_state = true;
        } else {
            self.view.empty_state = false;
            self.view.append(&self.games[start..], start);
        }

        self.view.set_section(
            &self.search_query,
            &self.active_genre,
            self.active_genre_label.as_deref(),
            self.total_count,
        );
        self.view.load_more_visible = self.has_more;
        self.page += 1;

        Ok(FetchOutcome::Loaded { kind, appended })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
