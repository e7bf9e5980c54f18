//! Normalization of directory wire types into domain records.

use memberdesk_core::{CustomerRecord, Location};

use crate::types::CustomerNode;

/// Converts a raw customer node into a [`CustomerRecord`].
///
/// The membership flag is set only when the metafield value is exactly
/// `"true"`; an absent or differently-valued metafield normalizes to
/// `false`. Empty strings collapse to `None` — this system never
/// distinguishes empty from absent.
#[must_use]
pub fn normalize_node(node: CustomerNode) -> CustomerRecord {
    let location = node.default_address.and_then(|addr| {
        let province = non_empty(addr.province);
        let postal_code = non_empty(addr.zip);
        if province.is_none() && postal_code.is_none() {
            None
        } else {
            Some(Location {
                province,
                postal_code,
            })
        }
    });

    CustomerRecord {
        id: node.id,
        display_name: node.display_name.unwrap_or_default(),
        email: non_empty(node.email),
        phone: non_empty(node.phone),
        location,
        is_member: node.is_member.is_some_and(|m| m.value == "true"),
        membership_expiry: node.expiry_date.and_then(|m| non_empty(Some(m.value))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
