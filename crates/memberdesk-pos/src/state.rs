//! Search view state.

use memberdesk_core::EnrichedCustomer;

/// The single view state of the search flow. Exactly one variant holds at
/// any time; the controller is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No query submitted yet, or the last submission was empty text.
    #[default]
    Idle,
    /// A request is in flight. There is no timeout here; a request that
    /// never completes leaves the view searching until the next submission.
    Searching,
    /// The last search returned at least one record, in directory order.
    Results(Vec<EnrichedCustomer>),
    /// The last search completed with zero records.
    Empty,
    /// The last search failed; the operator resubmits to retry.
    Error(String),
}

impl SearchState {
    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching)
    }
}
