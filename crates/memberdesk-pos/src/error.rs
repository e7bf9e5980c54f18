use thiserror::Error;

/// Failure reported by the host when asked to assign a customer to the
/// active transaction.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct AssignmentError(pub String);

/// Errors surfaced to the operator by the selection flow.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The record's identifier could not be translated to a legacy id, so
    /// selection is disabled for it. No host call is made.
    #[error("customer '{id}' has no translatable legacy id; selection is disabled")]
    NotSelectable { id: String },

    /// The host's cart assignment call failed. Not retried here.
    #[error("cart assignment failed: {0}")]
    Assignment(#[from] AssignmentError),
}
