use thiserror::Error;

/// Errors returned by the directory client.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory answered but reported query-level errors.
    #[error("directory API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
