//! Customer domain types.
//!
//! [`CustomerRecord`] is the normalized shape of a directory result;
//! [`EnrichedCustomer`] adds the derived fields computed at search time.
//! Both are plain owned values — the wire types live in the directory crate.

use chrono::NaiveDate;

use crate::badge::StatusBadge;

/// Province and postal code from the customer's default address.
///
/// Either part may be missing on its own; a record with neither carries
/// no `Location` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

/// A customer as returned by the directory service, after normalization.
///
/// `id` is the opaque global identifier and is used only as a lookup key.
/// Absent optional fields mean "unknown"; the empty-string/absent
/// distinction is erased during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<Location>,
    /// Membership flag; an absent signal normalizes to `false`.
    pub is_member: bool,
    /// Membership expiry date string; absent means no expiry on record.
    pub membership_expiry: Option<String>,
}

/// A [`CustomerRecord`] plus the fields derived at search time.
///
/// Built once per record by [`crate::enrich::enrich`]; never mutated
/// afterwards and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedCustomer {
    pub record: CustomerRecord,
    /// Recomputed on every search from the record's own membership signals.
    pub badge: StatusBadge,
    /// Legacy numeric id translated from `record.id`, or `None` when the
    /// identifier has no trailing numeric segment. `None` records stay in
    /// the result list but cannot be assigned to a transaction.
    pub legacy_id: Option<i64>,
}

impl EnrichedCustomer {
    /// Whether this record can be assigned to the active transaction.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.legacy_id.is_some()
    }

    /// A "province postal" summary for display, or `None` when the record
    /// has no usable location at all.
    #[must_use]
    pub fn location_label(&self) -> Option<String> {
        let location = self.record.location.as_ref()?;
        let parts: Vec<&str> = [location.province.as_deref(), location.postal_code.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Parses the membership expiry as a `YYYY-MM-DD` date.
    ///
    /// Returns `None` when no expiry is on record or the string does not
    /// match the expected format. Badge resolution does not depend on this;
    /// it is a display convenience.
    #[must_use]
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        let raw = self.record.membership_expiry.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}
