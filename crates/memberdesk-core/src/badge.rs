//! Membership status badge derivation.

/// The membership badge shown next to a customer in the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    /// No membership signal on the record.
    None,
    /// The membership flag is set.
    Member,
    /// Not currently a member, but an expiry date is on record.
    Expiring,
}

impl StatusBadge {
    /// Derives the badge from the two membership signals.
    ///
    /// Pure and total: the membership flag always dominates the expiry
    /// signal; a lapsed-looking expiry never demotes an active member.
    /// An expiry counts as present only when it is a non-empty string.
    #[must_use]
    pub fn resolve(is_member: bool, membership_expiry: Option<&str>) -> Self {
        if is_member {
            StatusBadge::Member
        } else if membership_expiry.is_some_and(|e| !e.is_empty()) {
            StatusBadge::Expiring
        } else {
            StatusBadge::None
        }
    }
}

impl std::fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusBadge::None => write!(f, "none"),
            StatusBadge::Member => write!(f, "member"),
            StatusBadge::Expiring => write!(f, "expiring"),
        }
    }
}
