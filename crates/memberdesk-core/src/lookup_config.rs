use std::time::Duration;

/// Runtime configuration for the customer lookup.
///
/// Built from `MEMBERDESK_*` environment variables by
/// [`crate::config::load_lookup_config`].
#[derive(Clone)]
pub struct LookupConfig {
    /// Endpoint of the directory service's query API.
    pub directory_url: String,
    /// Access token sent with every directory request, when the deployment
    /// requires one.
    pub access_token: Option<String>,
    /// Fixed result-page size passed to the directory query.
    pub page_size: u32,
    /// Per-request timeout; `None` leaves the request unbounded and the UI
    /// in its searching state until the transport gives up on its own.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub log_level: String,
}

impl LookupConfig {
    /// The request timeout as a [`Duration`], when one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("directory_url", &self.directory_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_access_token() {
        let cfg = LookupConfig {
            directory_url: "https://directory.example.com/api/graphql".to_string(),
            access_token: Some("shpat_secret".to_string()),
            page_size: 20,
            request_timeout_secs: None,
            user_agent: "memberdesk/0.1".to_string(),
            log_level: "info".to_string(),
        };
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("shpat_secret"), "token leaked: {debug}");
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn request_timeout_maps_seconds() {
        let cfg = LookupConfig {
            directory_url: String::new(),
            access_token: None,
            page_size: 20,
            request_timeout_secs: Some(15),
            user_agent: String::new(),
            log_level: "info".to_string(),
        };
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(15)));
    }
}
