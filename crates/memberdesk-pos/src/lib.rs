//! POS-side orchestration for the customer lookup.
//!
//! [`SearchController`] owns the single [`SearchState`], mediates between
//! operator-entered text and the rendered result list, and guarantees that
//! only the most recently submitted search can update state.
//! [`SelectionHandler`] binds a chosen result to the host's
//! assign-customer-to-transaction capability.
//!
//! The presentation layer is the host's: it reads [`SearchState`] clones via
//! [`SearchController::state`] and calls back into `submit`/`select`. No
//! visual contract lives here.

pub mod controller;
pub mod error;
pub mod selection;
pub mod state;

pub use controller::SearchController;
pub use error::{AssignmentError, SelectionError};
pub use selection::{CartApi, SelectionHandler};
pub use state::SearchState;
