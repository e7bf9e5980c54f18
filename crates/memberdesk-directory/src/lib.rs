//! Directory-service client for the memberdesk customer lookup.
//!
//! Builds the customer search document, submits it through an injected
//! [`QueryTransport`], and normalizes the raw response into
//! [`memberdesk_core::CustomerRecord`]s. The production transport is
//! [`HttpTransport`]; tests and embedding hosts may supply their own.
//!
//! This layer never retries; a host that wants a retry policy wraps the
//! transport.

pub mod error;
pub mod normalize;
pub mod query;
pub mod search;
pub mod transport;
pub mod types;

pub use error::DirectoryError;
pub use search::{CustomerDirectory, CustomerSearch};
pub use transport::{HttpTransport, QueryTransport};
