//! Enrichment of directory records into display-ready customers.

use crate::badge::StatusBadge;
use crate::customer::{CustomerRecord, EnrichedCustomer};
use crate::identity;

/// Computes the derived fields for one record.
///
/// Badge and legacy id are computed once into a new immutable value; the
/// inbound record is never patched in place. A malformed identifier is
/// logged and flagged as `legacy_id: None` rather than failing the whole
/// result list — sibling records are unaffected.
#[must_use]
pub fn enrich(record: CustomerRecord) -> EnrichedCustomer {
    let badge = StatusBadge::resolve(record.is_member, record.membership_expiry.as_deref());
    let legacy_id = match identity::legacy_id(&record.id) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::warn!(
                customer_id = %record.id,
                error = %err,
                "customer identifier not translatable; record will not be selectable"
            );
            None
        }
    };
    EnrichedCustomer {
        record,
        badge,
        legacy_id,
    }
}
