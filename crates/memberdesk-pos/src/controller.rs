//! Search orchestration with last-submission-wins semantics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use memberdesk_core::enrich;
use memberdesk_directory::CustomerSearch;

use crate::state::SearchState;

/// Owns the [`SearchState`] and mediates between operator input and the
/// rendered list.
///
/// Every submission takes the next value of a monotonically increasing
/// counter; a completed search applies its outcome only while its number is
/// still the latest. A response superseded by a newer submission is
/// discarded, so overlapping searches can never roll state backwards.
/// There is exactly one writer per transition and lock scopes are short.
pub struct SearchController<S> {
    directory: Arc<S>,
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<SearchState>,
    latest: AtomicU64,
}

// Manual impl: `S` itself need not be `Clone`, only shared.
impl<S> Clone for SearchController<S> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: CustomerSearch> SearchController<S> {
    #[must_use]
    pub fn new(directory: S) -> Self {
        Self {
            directory: Arc::new(directory),
            shared: Arc::new(Shared {
                state: Mutex::new(SearchState::Idle),
                latest: AtomicU64::new(0),
            }),
        }
    }

    /// A snapshot of the current view state for the presentation layer.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.lock_state().clone()
    }

    /// Submits one search for `text`.
    ///
    /// Empty or whitespace-only text resets to [`SearchState::Idle`] without
    /// touching the directory; the submission still advances the counter so
    /// an in-flight response cannot overwrite the reset. Any non-empty text
    /// (including a repeat of the previous query) enters
    /// [`SearchState::Searching`], awaits the directory, enriches each
    /// record, and applies `Results`/`Empty`/`Error` — unless a newer
    /// submission has taken over in the meantime.
    pub async fn submit(&self, text: &str) {
        let trimmed = text.trim();
        let seq = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if trimmed.is_empty() {
            self.apply_if_latest(seq, SearchState::Idle);
            return;
        }

        self.apply_if_latest(seq, SearchState::Searching);

        let next = match self.directory.search(trimmed).await {
            Ok(records) if records.is_empty() => SearchState::Empty,
            Ok(records) => SearchState::Results(records.into_iter().map(enrich).collect()),
            Err(err) => {
                tracing::warn!(query = trimmed, error = %err, "customer search failed");
                SearchState::Error(err.to_string())
            }
        };
        self.apply_if_latest(seq, next);
    }

    /// Applies `next` only if `seq` is still the latest submission.
    fn apply_if_latest(&self, seq: u64, next: SearchState) {
        let mut state = self.lock_state();
        if self.shared.latest.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "discarding superseded search outcome");
            return;
        }
        *state = next;
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        // The only writes are whole-value assignments, so a poisoned lock
        // still holds a coherent state.
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
