//! Translation of opaque global identifiers into legacy numeric ids.
//!
//! The directory identifies customers with path-like strings such as
//! `gid://shop/Customer/482913`; the host's cart-assignment call only
//! accepts the trailing integer. Nothing else in the identifier is parsed.

use thiserror::Error;

/// The identifier has no trailing decimal segment to translate.
///
/// Carries the offending identifier so the operator-facing log can name
/// the record. A record with this failure stays in the result list but
/// must not be assigned to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("customer identifier '{0}' has no trailing numeric segment")]
pub struct MalformedIdentifier(pub String);

/// Extracts the legacy numeric id from an opaque global identifier.
///
/// The final `/`-separated segment must be a decimal integer.
///
/// # Errors
///
/// Returns [`MalformedIdentifier`] when the final segment is missing or not
/// a decimal integer. There is no sentinel fallback; callers decide how to
/// flag the record.
pub fn legacy_id(id: &str) -> Result<i64, MalformedIdentifier> {
    id.rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<i64>().ok())
        .ok_or_else(|| MalformedIdentifier(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trailing_segment_from_gid() {
        assert_eq!(legacy_id("gid://shop/Customer/482913"), Ok(482913));
    }

    #[test]
    fn extracts_from_single_segment_number() {
        assert_eq!(legacy_id("7"), Ok(7));
    }

    #[test]
    fn rejects_identifier_without_numeric_segment() {
        assert_eq!(
            legacy_id("not-a-gid"),
            Err(MalformedIdentifier("not-a-gid".to_owned()))
        );
    }

    #[test]
    fn rejects_trailing_slash() {
        assert!(legacy_id("gid://shop/Customer/").is_err());
    }

    #[test]
    fn rejects_non_decimal_trailing_segment() {
        assert!(legacy_id("gid://shop/Customer/48a913").is_err());
        assert!(legacy_id("gid://shop/Customer/checkout").is_err());
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(legacy_id("").is_err());
    }

    #[test]
    fn error_message_names_the_identifier() {
        let err = legacy_id("gid://shop/Customer/abc").unwrap_err();
        assert!(err.to_string().contains("gid://shop/Customer/abc"));
    }
}
