//! Query transport: the injected seam between the search layer and the
//! directory service.
//!
//! [`HttpTransport`] is the production implementation — a thin `reqwest`
//! wrapper that POSTs the query document and returns the raw JSON body.
//! Tests and embedding hosts can substitute their own [`QueryTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use memberdesk_core::LookupConfig;

use crate::error::DirectoryError;

/// Submits a query-language document to the directory service.
///
/// Implementations own the wire protocol and any retry/timeout policy;
/// the search layer above never retries.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Runs one query and returns the raw JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] on network failure or a non-2xx
    /// status, and [`DirectoryError::Deserialize`] if the body is not JSON.
    async fn run_query(&self, document: &str) -> Result<serde_json::Value, DirectoryError>;
}

/// HTTP transport for the directory's query endpoint.
///
/// Use [`HttpTransport::new`] with the loaded [`LookupConfig`] for
/// production, or [`HttpTransport::with_endpoint`] to point at a mock
/// server in tests.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    access_token: Option<String>,
}

impl HttpTransport {
    /// Creates a transport from the runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DirectoryError::Api`] if the configured
    /// endpoint is not a valid URL.
    pub fn new(config: &LookupConfig) -> Result<Self, DirectoryError> {
        Self::with_endpoint(
            &config.directory_url,
            config.access_token.as_deref(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    /// Creates a transport with an explicit endpoint (for testing with wiremock).
    ///
    /// `timeout` is the whole-request timeout; `None` leaves requests
    /// unbounded, matching the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DirectoryError::Api`] if `endpoint` is
    /// not a valid URL.
    pub fn with_endpoint(
        endpoint: &str,
        access_token: Option<&str>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, DirectoryError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.to_owned());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| DirectoryError::Api(format!("invalid directory URL '{endpoint}': {e}")))?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.map(str::to_owned),
        })
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn run_query(&self, document: &str) -> Result<serde_json::Value, DirectoryError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "query": document }));
        if let Some(token) = &self.access_token {
            request = request.header("X-Access-Token", token);
        }

        let response = request.send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DirectoryError::Deserialize {
            context: self.endpoint.to_string(),
            source: e,
        })
    }
}
