//! Customer search over an injected query transport.

use async_trait::async_trait;

use memberdesk_core::CustomerRecord;

use crate::error::DirectoryError;
use crate::normalize::normalize_node;
use crate::query::customer_search_document;
use crate::transport::QueryTransport;
use crate::types::QueryResponse;

/// The search seam consumed by the POS controller.
#[async_trait]
pub trait CustomerSearch: Send + Sync {
    /// Searches the directory for customers matching `text`.
    ///
    /// Empty or whitespace-only text returns an empty list without
    /// touching the transport.
    ///
    /// # Errors
    ///
    /// Propagates [`DirectoryError`] from the transport, plus
    /// [`DirectoryError::Api`] when the directory reports query-level
    /// errors or returns no data.
    async fn search(&self, text: &str) -> Result<Vec<CustomerRecord>, DirectoryError>;
}

/// Builds the search document, submits it, and normalizes the response.
///
/// Generic over the transport so the HTTP implementation can be swapped
/// for a host-provided or mock one. Results keep the directory's ordering;
/// nothing is re-sorted here.
pub struct CustomerDirectory<T> {
    transport: T,
    page_size: u32,
}

impl<T: QueryTransport> CustomerDirectory<T> {
    #[must_use]
    pub fn new(transport: T, page_size: u32) -> Self {
        Self {
            transport,
            page_size,
        }
    }
}

#[async_trait]
impl<T: QueryTransport> CustomerSearch for CustomerDirectory<T> {
    async fn search(&self, text: &str) -> Result<Vec<CustomerRecord>, DirectoryError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let document = customer_search_document(trimmed, self.page_size);
        let body = self.transport.run_query(&document).await?;

        let response: QueryResponse =
            serde_json::from_value(body).map_err(|e| DirectoryError::Deserialize {
                context: format!("customer search for '{trimmed}'"),
                source: e,
            })?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(DirectoryError::Api(messages.join("; ")));
        }

        let data = response
            .data
            .ok_or_else(|| DirectoryError::Api("response carried neither data nor errors".into()))?;

        let records: Vec<CustomerRecord> = data
            .customers
            .edges
            .into_iter()
            .map(|edge| normalize_node(edge.node))
            .collect();

        tracing::debug!(query = trimmed, count = records.len(), "directory search completed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    /// Transport that records calls and replays a canned JSON body.
    struct CannedTransport {
        body: serde_json::Value,
        calls: AtomicU32,
    }

    impl CannedTransport {
        fn new(body: serde_json::Value) -> Self {
            Self {
                body,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl QueryTransport for CannedTransport {
        async fn run_query(&self, _document: &str) -> Result<serde_json::Value, DirectoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn empty_text_never_calls_the_transport() {
        let directory = CustomerDirectory::new(
            CannedTransport::new(serde_json::json!({})),
            20,
        );
        let records = directory.search("   ").await.expect("empty search is ok");
        assert!(records.is_empty());
        assert_eq!(directory.transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn query_errors_surface_as_api_error() {
        let body = serde_json::json!({
            "errors": [
                { "message": "throttled" },
                { "message": "try again" }
            ]
        });
        let directory = CustomerDirectory::new(CannedTransport::new(body), 20);
        let err = directory.search("john").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("throttled") && msg.contains("try again"), "{msg}");
    }

    #[tokio::test]
    async fn missing_data_is_an_api_error() {
        let directory = CustomerDirectory::new(CannedTransport::new(serde_json::json!({})), 20);
        assert!(matches!(
            directory.search("john").await,
            Err(DirectoryError::Api(_))
        ));
    }

    #[tokio::test]
    async fn nodes_are_normalized_in_directory_order() {
        let body = serde_json::json!({
            "data": {
                "customers": {
                    "edges": [
                        { "node": { "id": "gid://shop/Customer/2", "displayName": "B" } },
                        { "node": { "id": "gid://shop/Customer/1", "displayName": "A" } }
                    ]
                }
            }
        });
        let directory = CustomerDirectory::new(CannedTransport::new(body), 20);
        let records = directory.search("customer").await.expect("should parse");
        let names: Vec<&str> = records.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"], "ordering must be the directory's");
    }
}
