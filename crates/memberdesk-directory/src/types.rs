//! Directory wire types.
//!
//! These model the JSON the directory service actually returns for the
//! customer search document: a `data.customers.edges[].node` connection,
//! plus a top-level `errors` array when the query itself failed. Domain
//! types live in `memberdesk-core`; [`crate::normalize`] converts between
//! the two.

use serde::Deserialize;

/// Top-level envelope: `data` on success, `errors` on query failure.
/// Both may be present when a query partially fails; callers treat any
/// non-empty `errors` as fatal for the attempt.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<CustomersData>,
    #[serde(default)]
    pub errors: Vec<QueryError>,
}

/// One query-level error message.
#[derive(Debug, Deserialize)]
pub struct QueryError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomersData {
    pub customers: CustomerConnection,
}

#[derive(Debug, Deserialize)]
pub struct CustomerConnection {
    #[serde(default)]
    pub edges: Vec<CustomerEdge>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerEdge {
    pub node: CustomerNode,
}

/// A raw customer node as selected by the search document.
#[derive(Debug, Deserialize)]
pub struct CustomerNode {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "defaultAddress", default)]
    pub default_address: Option<WireAddress>,
    #[serde(rename = "isMember", default)]
    pub is_member: Option<MetafieldValue>,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: Option<MetafieldValue>,
}

/// The location pair selected from the customer's default address.
#[derive(Debug, Deserialize)]
pub struct WireAddress {
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// A metafield is returned as an object wrapping its string `value`;
/// the metafield itself is `null` when unset.
#[derive(Debug, Deserialize)]
pub struct MetafieldValue {
    pub value: String,
}
