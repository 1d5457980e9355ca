//! Event loop driving a browsing session.
//!
//! The controller is single-threaded and cooperative: [`BrowseController::run`]
//! waits on UI events, the search debounce deadline and the one in-flight
//! fetch, and handles whichever is ready first. Fetches run on a spawned task
//! so events keep flowing while one is outstanding; the session's in-flight
//! guard drops any fetch trigger that arrives in the meantime.

use std::sync::Arc;

use gamevault_core::catalog::{GameSummary, Genre, Page};
use gamevault_core::debounce::Debouncer;
use gamevault_core::detail::ModalState;
use gamevault_core::session::{BrowseSession, FetchOutcome, FetchRequest, FetchTicket, Tab};
use gamevault_core::view::Toast;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::events::UiEvent;
use crate::gateway::{GameSource, GatewayError};

type FetchResult = Result<Page<GameSummary>, GatewayError>;

struct InFlight {
    ticket: FetchTicket,
    handle: JoinHandle<FetchResult>,
}

enum Step {
    Event(UiEvent),
    Closed,
    Fetched(FetchTicket, FetchResult),
    DebounceElapsed,
}

pub struct BrowseController<S> {
    source: Arc<S>,
    session: BrowseSession,
    search: Debouncer<String>,
    modal: ModalState,
    genres: Vec<Genre>,
    in_flight: Option<InFlight>,
    toasts: Vec<Toast>,
}

impl<S: GameSource + 'static> BrowseController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            session: BrowseSession::new(),
            search: Debouncer::default(),
            modal: ModalState::default(),
            genres: Vec::new(),
            in_flight: None,
            toasts: Vec::new(),
        }
    }

    pub fn session(&self) -> &BrowseSession {
        &self.session
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Whether a fetch task is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Drain toasts raised since the last call.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Initial load: the first page of top-rated games.
    pub fn boot(&mut self) {
        let request = self.session.reset_and_fetch();
        self.start(request);
    }

    /// Fetch the genre list for the filter pills. A failure leaves the list
    /// empty; browsing still works.
    pub async fn load_genres(&mut self) {
        match self.source.list_genres().await {
            Ok(genres) => {
                tracing::debug!(count = genres.len(), "Genres loaded");
                self.genres = genres;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load genres");
            }
        }
    }

    /// Apply one UI event.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::SearchInput(text) => {
                self.session.input_search(&text);
                self.search.push(text, Instant::now().into_std());
            }
            UiEvent::SearchClear => {
                self.search.cancel();
                let request = self.session.clear_search();
                self.start(request);
            }
            UiEvent::GenreSelected { slug, label } => {
                self.search.cancel();
                let request = self.session.select_genre(&slug, label.as_deref());
                self.start(request);
            }
            UiEvent::TabSelected(tab) => {
                if tab == Tab::Home {
                    self.search.cancel();
                }
                let request = self.session.select_tab(tab);
                self.start(request);
            }
            UiEvent::LoadMore => {
                let request = self.session.load_more();
                self.start(request);
            }
            UiEvent::CardSelected(index) => match self.session.game(index) {
                Some(game) => {
                    self.modal.open(game);
                }
                None => tracing::debug!(index, "Selected card is not loaded"),
            },
            UiEvent::Modal(input) => {
                self.modal.handle(input);
            }
        }
    }

    /// Fire the debounced search if its quiet period has elapsed.
    pub fn poll_debounce(&mut self) {
        if let Some(text) = self.search.poll(Instant::now().into_std()) {
            let request = self.session.apply_search(&text);
            self.start(request);
        }
    }

    /// Wait for the in-flight fetch, if any, and apply its result.
    pub async fn settle(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            let result = join(in_flight.handle).await;
            self.finish(in_flight.ticket, result);
        }
    }

    /// Process events until the channel closes, then let any in-flight fetch
    /// finish. A pending debounced search is discarded on close.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        loop {
            let deadline = self.search.deadline().map(Instant::from_std);
            let debouncing = deadline.is_some();
            let fire_at = deadline.unwrap_or_else(Instant::now);
            let fetching = self.in_flight.is_some();

            let step = tokio::select! {
                event = events.recv() => match event {
                    Some(event) => Step::Event(event),
                    None => Step::Closed,
                },
                (ticket, result) = wait_in_flight(&mut self.in_flight), if fetching => {
                    Step::Fetched(ticket, result)
                }
                () = tokio::time::sleep_until(fire_at), if debouncing => {
                    Step::DebounceElapsed
                }
            };

            match step {
                Step::Event(event) => self.handle(event),
                Step::Fetched(ticket, result) => {
                    self.in_flight = None;
                    self.finish(ticket, result);
                }
                Step::DebounceElapsed => self.poll_debounce(),
                Step::Closed => break,
            }
        }

        self.search.cancel();
        self.settle().await;
        tracing::debug!("Browse controller stopped");
    }

    fn start(&mut self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            tracing::debug!(
                loading = self.session.is_loading(),
                "Fetch not started",
            );
            return;
        };

        tracing::debug!(
            ticket = %request.ticket,
            kind = ?request.kind,
            page = request.query.page,
            "Fetching games",
        );

        let source = Arc::clone(&self.source);
        let query = request.query;
        let handle = tokio::spawn(async move { source.list_games(&query).await });
        self.in_flight = Some(InFlight {
            ticket: request.ticket,
            handle,
        });
    }

    fn finish(&mut self, ticket: FetchTicket, result: FetchResult) {
        if let Err(err) = &result {
            tracing::error!(ticket = %ticket, error = %err, "Fetching games failed");
        }

        match self.session.complete(ticket, result) {
            Ok(FetchOutcome::Loaded { kind, appended }) => {
                tracing::debug!(
                    ticket = %ticket,
                    ?kind,
                    appended,
                    total = self.session.games().len(),
                    "Games loaded",
                );
            }
            Ok(FetchOutcome::Failed { toast, .. }) => self.toasts.push(toast),
            Err(err) => tracing::warn!(error = %err, "Ignoring fetch completion"),
        }
    }
}

async fn join(handle: JoinHandle<FetchResult>) -> FetchResult {
    handle.await.unwrap_or_else(|err| Err(GatewayError::Task(err)))
}

/// Resolve with the in-flight fetch's result. Never resolves when idle.
async fn wait_in_flight(slot: &mut Option<InFlight>) -> (FetchTicket, FetchResult) {
    match slot {
        Some(in_flight) => {
            let result = (&mut in_flight.handle)
                .await
                .unwrap_or_else(|err| Err(GatewayError::Task(err)));
            (in_flight.ticket, result)
        }
        None => std::future::pending().await,
    }
}
