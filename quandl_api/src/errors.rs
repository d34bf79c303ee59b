//! Error types for the API client.

/// Errors that can occur when building or running a query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The assembled URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The query is authenticated but no API key was configured.
    #[error("API key required for an authenticated query")]
    MissingApiKey,
    /// A date string was not in `yyyy-MM-dd` form.
    #[error("Invalid date '{0}', expected yyyy-MM-dd")]
    InvalidDate(String),
    /// A database or dataset code that cannot be used as one path segment.
    #[error("Invalid code '{0}': '.' and '..' cannot be used as a path segment")]
    InvalidCode(String),
    /// The transport failed before a response was received.
    #[error("Request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(Box::new(e))
    }
}
