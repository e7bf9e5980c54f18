//! Domain model and pure enrichment logic for the memberdesk customer lookup.
//!
//! This crate holds the types shared by the directory client and the POS
//! search flow: the [`CustomerRecord`] returned by the directory, the
//! [`EnrichedCustomer`] handed to the presentation layer, the pure
//! [`StatusBadge`] resolver, the legacy-id translation, and the environment
//! configuration.

pub mod badge;
pub mod config;
pub mod customer;
pub mod enrich;
pub mod identity;
pub mod lookup_config;

pub use badge::StatusBadge;
pub use config::{load_lookup_config, load_lookup_config_from_env, ConfigError};
pub use customer::{CustomerRecord, EnrichedCustomer, Location};
pub use enrich::enrich;
pub use identity::{legacy_id, MalformedIdentifier};
pub use lookup_config::LookupConfig;
