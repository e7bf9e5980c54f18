//! Customer search document construction.
//!
//! The directory speaks a GraphQL-style query language; the free text the
//! operator typed is embedded inside a quoted `query:` argument, so it is
//! escaped before interpolation. Injection into the surrounding document
//! must be impossible regardless of input.

/// Metafield namespace holding both membership signals.
pub const MEMBERSHIP_NAMESPACE: &str = "customer";
/// Metafield key for the membership flag.
pub const MEMBER_FLAG_KEY: &str = "is_member";
/// Metafield key for the membership expiry date.
pub const EXPIRY_KEY: &str = "expiry_date_membership";

/// Builds the customer search document for one page of results.
///
/// Selects the identifier, display name, contact fields, default-address
/// location pair, and the two membership metafields (aliased `isMember` and
/// `expiryDate`). `text` is expected to be already trimmed by the caller.
#[must_use]
pub fn customer_search_document(text: &str, first: u32) -> String {
    let escaped = escape_text(text);
    format!(
        r#"{{
  customers(first: {first}, query: "{escaped}") {{
    edges {{
      node {{
        id
        displayName
        email
        phone
        defaultAddress {{
          province
          zip
        }}
        isMember: metafield(namespace: "{MEMBERSHIP_NAMESPACE}", key: "{MEMBER_FLAG_KEY}") {{
          value
        }}
        expiryDate: metafield(namespace: "{MEMBERSHIP_NAMESPACE}", key: "{EXPIRY_KEY}") {{
          value
        }}
      }}
    }}
  }}
}}"#
    )
}

/// Escapes free text for embedding inside a double-quoted document string.
///
/// Backslashes and double quotes are escaped; literal newlines, carriage
/// returns, and tabs become their escape sequences so the document stays a
/// single well-formed string literal.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
