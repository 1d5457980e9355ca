//! Clock-agnostic debouncer for search-as-you-type.
//!
//! The caller supplies the current instant on every call, so the same logic
//! runs under a real clock or a paused test clock.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(480);

/// Holds at most one pending value and the instant it becomes due.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a new value, replacing any pending one and restarting the timer.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Instant at which the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((value, due)) if now >= due => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
