//! Tests for the browse controller: fetch guard, debounce and view updates.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gamevault_client::{BrowseController, GameSource, GatewayError, UiEvent};
use gamevault_core::catalog::{GameSummary, Genre, Page};
use gamevault_core::detail::ModalInput;
use gamevault_core::query::BrowseQuery;
use gamevault_core::session::Tab;
use gamevault_core::view::{FETCH_FAILED_MESSAGE, TOAST_DURATION};
use tokio::sync::{mpsc, Semaphore};

// ---------------------------------------------------------------------------
// Stub source
// ---------------------------------------------------------------------------

/// Serves canned pages in order and records every query it receives.
///
/// When gated, each fetch waits for a permit so a test can hold it in flight.
#[derive(Default)]
struct StubSource {
    pages: Mutex<VecDeque<Result<Page<GameSummary>, u16>>>,
    genres: Mutex<Option<Result<Vec<Genre>, u16>>>,
    queries: Mutex<Vec<BrowseQuery>>,
    gate: Option<Arc<Semaphore>>,
}

impl StubSource {
    fn serving(pages: Vec<Result<Page<GameSummary>, u16>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    fn with_genres(self, genres: Result<Vec<Genre>, u16>) -> Self {
        *self.genres.lock().unwrap() = Some(genres);
        self
    }

    fn queries(&self) -> Vec<BrowseQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameSource for StubSource {
    async fn list_games(&self, query: &BrowseQuery) -> Result<Page<GameSummary>, GatewayError> {
        self.queries.lock().unwrap().push(query.clone());
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        let next = self.pages.lock().unwrap().pop_front();
        match next {
            Some(Ok(page)) => Ok(page),
            Some(Err(status)) => Err(GatewayError::Status { status }),
            None => Ok(page_of(0..0, 0, false)),
        }
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, GatewayError> {
        match self.genres.lock().unwrap().take() {
            Some(Ok(genres)) => Ok(genres),
            Some(Err(status)) => Err(GatewayError::Status { status }),
            None => Ok(Vec::new()),
        }
    }
}

fn game(id: i64) -> GameSummary {
    GameSummary {
        id: Some(id),
        name: Some(format!("Game {id}")),
        slug: Some(format!("game-{id}")),
        released: Some("2020-01-01".into()),
        rating: Some(4.0),
        ratings_count: Some(1200),
        background_image: None,
        genres: vec!["Action".into()],
        tags: Vec::new(),
        platforms: vec!["PC".into()],
    }
}

fn page_of(ids: std::ops::Range<i64>, count: i64, more: bool) -> Page<GameSummary> {
    Page {
        count,
        next: more.then(|| "https://api.rawg.io/api/games?page=next".to_string()),
        results: ids.map(game).collect(),
    }
}

fn controller(source: StubSource) -> (BrowseController<StubSource>, Arc<StubSource>) {
    let source = Arc::new(source);
    (BrowseController::new(Arc::clone(&source)), source)
}

// ---------------------------------------------------------------------------
// Test: initial load
// ---------------------------------------------------------------------------

#[tokio::test]
async fn boot_loads_first_top_rated_page() {
    let (mut ctl, source) = controller(StubSource::serving(vec![Ok(page_of(0..20, 900, true))]));

    ctl.boot();
    assert!(ctl.session().is_loading());
    assert_eq!(ctl.session().view().skeletons, 10);
    assert!(!ctl.session().view().load_more_enabled);

    ctl.settle().await;

    let session = ctl.session();
    assert!(!ctl.is_fetching());
    assert!(!session.is_loading());
    assert_eq!(session.games().len(), 20);
    assert_eq!(session.page(), 2);
    assert_eq!(session.view().cards.len(), 20);
    assert_eq!(session.view().skeletons, 0);
    assert_eq!(session.view().section_label, "Top Rated");
    assert_eq!(session.view().section_count, "900 games");
    assert!(session.view().load_more_visible);
    assert!(session.view().load_more_enabled);
    assert_eq!(source.queries(), vec![BrowseQuery::new(1, "", "")]);
}

// ---------------------------------------------------------------------------
// Test: at most one fetch in flight
// ---------------------------------------------------------------------------

#[tokio::test]
async fn triggers_during_a_fetch_are_dropped() {
    let (source, gate) = StubSource::serving(vec![Ok(page_of(0..20, 40, true))]).gated();
    let (mut ctl, source) = controller(source);

    ctl.boot();
    ctl.handle(UiEvent::LoadMore);
    ctl.handle(UiEvent::SearchClear);
    ctl.handle(UiEvent::TabSelected(Tab::Home));
    assert!(ctl.is_fetching());

    gate.add_permits(1);
    ctl.settle().await;

    assert_eq!(source.queries().len(), 1);
    assert_eq!(ctl.session().games().len(), 20);
    assert!(!ctl.session().is_loading());
}

#[tokio::test]
async fn load_more_appends_next_page_and_hides_at_end() {
    let (mut ctl, source) = controller(StubSource::serving(vec![
        Ok(page_of(0..20, 25, true)),
        Ok(page_of(20..25, 25, false)),
    ]));

    ctl.boot();
    ctl.settle().await;
    ctl.handle(UiEvent::LoadMore);
    ctl.settle().await;

    let session = ctl.session();
    assert_eq!(session.games().len(), 25);
    assert_eq!(session.view().cards.len(), 25);
    assert_eq!(session.view().cards[24].animation_delay_ms, 24 * 40);
    assert!(!session.view().load_more_visible);
    assert_eq!(
        source.queries().iter().map(|q| q.page).collect::<Vec<_>>(),
        vec![1, 2]
    );

    // No further page was reported, so another press does nothing.
    ctl.handle(UiEvent::LoadMore);
    assert!(!ctl.is_fetching());
    assert_eq!(source.queries().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: debounced search
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_issue_one_search() {
    let (mut ctl, source) = controller(StubSource::serving(vec![Ok(page_of(0..3, 3, false))]));
    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(async move {
        ctl.run(rx).await;
        ctl
    });

    for text in ["z", "ze", "zel", "zeld", "zelda "] {
        tx.send(UiEvent::SearchInput(text.to_string())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(source.queries().is_empty());

    tokio::time::sleep(Duration::from_millis(500)).await;
    drop(tx);
    let ctl = task.await.unwrap();

    assert_eq!(source.queries(), vec![BrowseQuery::new(1, "zelda", "")]);
    assert_eq!(ctl.session().search_query(), "zelda");
    assert_eq!(ctl.session().view().section_label, "Results for \"zelda\"");
    assert_eq!(ctl.session().games().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn pending_search_is_discarded_when_events_close() {
    let (mut ctl, source) = controller(StubSource::default());
    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(async move {
        ctl.run(rx).await;
        ctl
    });

    tx.send(UiEvent::SearchInput("hal".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    drop(tx);
    task.await.unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(source.queries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn genre_selection_cancels_pending_search() {
    let (mut ctl, source) = controller(StubSource::default());

    ctl.handle(UiEvent::SearchInput("port".into()));
    ctl.handle(UiEvent::GenreSelected {
        slug: "puzzle".into(),
        label: Some("Puzzle".into()),
    });
    ctl.settle().await;

    tokio::time::sleep(Duration::from_secs(1)).await;
    ctl.poll_debounce();

    assert!(!ctl.is_fetching());
    assert_eq!(source.queries(), vec![BrowseQuery::new(1, "", "puzzle")]);
    assert_eq!(ctl.session().search_text(), "");
    assert!(!ctl.session().view().search_clear_visible);
}

// ---------------------------------------------------------------------------
// Test: empty results and failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_result_shows_empty_state() {
    let (mut ctl, _source) = controller(StubSource::serving(vec![Ok(page_of(0..0, 0, false))]));

    ctl.handle(UiEvent::GenreSelected {
        slug: "nonexistent".into(),
        label: None,
    });
    ctl.settle().await;

    let view = ctl.session().view();
    assert!(view.empty_state);
    assert!(view.cards.is_empty());
    assert!(!view.load_more_visible);
    assert_eq!(view.section_count, "");
    assert!(ctl.take_toasts().is_empty());
}

#[tokio::test]
async fn reset_failure_clears_grid_and_raises_toast() {
    let (mut ctl, _source) = controller(StubSource::serving(vec![Err(401)]));

    ctl.boot();
    ctl.settle().await;

    let session = ctl.session();
    assert!(!session.is_loading());
    assert!(session.games().is_empty());
    assert!(session.view().cards.is_empty());
    assert_eq!(session.view().skeletons, 0);

    let toasts = ctl.take_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, FETCH_FAILED_MESSAGE);
    assert_eq!(toasts[0].duration, TOAST_DURATION);
    assert!(ctl.take_toasts().is_empty());
}

#[tokio::test]
async fn next_page_failure_keeps_loaded_games() {
    let (mut ctl, source) = controller(StubSource::serving(vec![
        Ok(page_of(0..20, 60, true)),
        Err(500),
        Ok(page_of(20..40, 60, true)),
    ]));

    ctl.boot();
    ctl.settle().await;
    ctl.handle(UiEvent::LoadMore);
    ctl.settle().await;

    assert_eq!(ctl.session().games().len(), 20);
    assert_eq!(ctl.session().view().cards.len(), 20);
    assert_eq!(ctl.session().page(), 2);
    assert_eq!(ctl.take_toasts().len(), 1);

    // The same page is requested again on retry.
    ctl.handle(UiEvent::LoadMore);
    ctl.settle().await;

    assert_eq!(ctl.session().games().len(), 40);
    assert_eq!(
        source.queries().iter().map(|q| q.page).collect::<Vec<_>>(),
        vec![1, 2, 2]
    );
}

// ---------------------------------------------------------------------------
// Test: detail modal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn selecting_a_card_opens_detail_and_swipe_closes_it() {
    let (mut ctl, _source) = controller(StubSource::serving(vec![Ok(page_of(0..5, 5, false))]));
    ctl.boot();
    ctl.settle().await;

    ctl.handle(UiEvent::CardSelected(99));
    assert!(!ctl.modal().is_open());

    ctl.handle(UiEvent::CardSelected(3));
    let detail = ctl.modal().current().unwrap();
    assert_eq!(detail.title, "Game 3");

    ctl.handle(UiEvent::Modal(ModalInput::TouchStart { y: 100.0 }));
    ctl.handle(UiEvent::Modal(ModalInput::TouchEnd { y: 140.0 }));
    assert!(ctl.modal().is_open());

    ctl.handle(UiEvent::Modal(ModalInput::TouchStart { y: 100.0 }));
    ctl.handle(UiEvent::Modal(ModalInput::TouchEnd { y: 170.0 }));
    assert!(!ctl.modal().is_open());
}

// ---------------------------------------------------------------------------
// Test: genres and tabs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn genres_load_and_failure_leaves_list_empty() {
    let action = Genre {
        id: Some(4),
        name: Some("Action".into()),
        slug: Some("action".into()),
    };
    let (mut ctl, _source) =
        controller(StubSource::default().with_genres(Ok(vec![action.clone()])));
    ctl.load_genres().await;
    assert_eq!(ctl.genres(), &[action]);

    let (mut ctl, _source) = controller(StubSource::default().with_genres(Err(500)));
    ctl.load_genres().await;
    assert!(ctl.genres().is_empty());
}

#[tokio::test]
async fn only_home_tab_fetches() {
    let (mut ctl, source) = controller(StubSource::default());

    ctl.handle(UiEvent::TabSelected(Tab::Search));
    ctl.handle(UiEvent::TabSelected(Tab::Categories));
    assert!(!ctl.is_fetching());
    assert_eq!(ctl.session().active_tab(), Tab::Categories);

    ctl.handle(UiEvent::TabSelected(Tab::Home));
    ctl.settle().await;
    assert_eq!(source.queries(), vec![BrowseQuery::new(1, "", "")]);
}

// ---------------------------------------------------------------------------
// Test: run loop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn run_loop_applies_fetches_and_drops_overlapping_triggers() {
    let (source, gate) = StubSource::serving(vec![
        Ok(page_of(0..20, 40, true)),
        Ok(page_of(20..40, 40, false)),
    ])
    .gated();
    let (mut ctl, source) = controller(source);
    ctl.boot();

    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(async move {
        ctl.run(rx).await;
        ctl
    });

    // Held in flight: this press is dropped.
    tx.send(UiEvent::LoadMore).await.unwrap();
    tokio::task::yield_now().await;
    gate.add_permits(1);

    while source.queries().len() < 2 {
        tokio::task::yield_now().await;
        let _ = tx.try_send(UiEvent::LoadMore);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    gate.add_permits(1);
    drop(tx);

    let ctl = task.await.unwrap();
    assert_eq!(ctl.session().games().len(), 40);
    assert_eq!(
        source.queries().iter().map(|q| q.page).collect::<Vec<_>>(),
        vec![1, 2]
    );
}
