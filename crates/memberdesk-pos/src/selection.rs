//! Binding a chosen result to the host's active transaction.

use async_trait::async_trait;

use memberdesk_core::EnrichedCustomer;

use crate::error::{AssignmentError, SelectionError};

/// The host's assign-customer-to-active-transaction capability.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Assigns the customer with `legacy_id` to the active transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] when the host rejects or fails the
    /// assignment.
    async fn assign_customer(&self, legacy_id: i64) -> Result<(), AssignmentError>;
}

/// Consumes a chosen [`EnrichedCustomer`] and calls the host exactly once.
pub struct SelectionHandler<C> {
    cart: C,
}

impl<C: CartApi> SelectionHandler<C> {
    #[must_use]
    pub fn new(cart: C) -> Self {
        Self { cart }
    }

    /// Assigns `customer` to the active transaction.
    ///
    /// A record whose identifier never translated is rejected up front —
    /// no host call, no sentinel id. Otherwise the host is called exactly
    /// once; its failure is surfaced, never swallowed and never retried.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::NotSelectable`] when `customer.legacy_id` is absent.
    /// - [`SelectionError::Assignment`] when the host call fails.
    pub async fn select(&self, customer: &EnrichedCustomer) -> Result<(), SelectionError> {
        let Some(legacy_id) = customer.legacy_id else {
            tracing::warn!(
                customer_id = %customer.record.id,
                "selection rejected: identifier was never translated"
            );
            return Err(SelectionError::NotSelectable {
                id: customer.record.id.clone(),
            });
        };

        self.cart.assign_customer(legacy_id).await?;
        tracing::info!(
            customer_id = %customer.record.id,
            legacy_id,
            "customer assigned to active transaction"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use memberdesk_core::{enrich, CustomerRecord};

    use super::*;

    struct RecordingCart {
        calls: AtomicU32,
        last_id: Mutex<Option<i64>>,
        fail_with: Option<String>,
    }

    impl RecordingCart {
        fn succeeding() -> Self {
            Self {
                calls: AtomicU32::new(0),
                last_id: Mutex::new(None),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_owned()),
                ..Self::succeeding()
            }
        }
    }

    #[async_trait]
    impl CartApi for RecordingCart {
        async fn assign_customer(&self, legacy_id: i64) -> Result<(), AssignmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_id.lock().unwrap() = Some(legacy_id);
            match &self.fail_with {
                Some(message) => Err(AssignmentError(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn member(id: &str) -> EnrichedCustomer {
        enrich(CustomerRecord {
            id: id.to_owned(),
            display_name: "Dana Diggers".to_owned(),
            email: None,
            phone: None,
            location: None,
            is_member: true,
            membership_expiry: None,
        })
    }

    #[tokio::test]
    async fn selecting_a_member_calls_the_host_once_with_the_translated_id() {
        let handler = SelectionHandler::new(RecordingCart::succeeding());
        let customer = member("gid://shop/Customer/482913");

        handler.select(&customer).await.expect("selection succeeds");

        assert_eq!(handler.cart.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*handler.cart.last_id.lock().unwrap(), Some(482913));
    }

    #[tokio::test]
    async fn non_translatable_record_is_rejected_without_a_host_call() {
        let handler = SelectionHandler::new(RecordingCart::succeeding());
        let customer = member("not-a-gid");
        assert!(customer.legacy_id.is_none(), "precondition");

        let err = handler.select(&customer).await.unwrap_err();

        assert!(
            matches!(err, SelectionError::NotSelectable { ref id } if id == "not-a-gid"),
            "got: {err}"
        );
        assert_eq!(handler.cart.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn host_failure_is_surfaced_and_not_retried() {
        let handler = SelectionHandler::new(RecordingCart::failing("register offline"));
        let customer = member("gid://shop/Customer/7");

        let err = handler.select(&customer).await.unwrap_err();

        assert!(
            matches!(err, SelectionError::Assignment(_)),
            "got: {err}"
        );
        assert!(err.to_string().contains("register offline"));
        assert_eq!(
            handler.cart.calls.load(Ordering::SeqCst),
            1,
            "host failure must not trigger a retry"
        );
    }
}
