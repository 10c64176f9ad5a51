//! Error types for the Circonus client.

use thiserror::Error;

/// Errors returned by [`CirconusApi`](crate::CirconusApi) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-success status.
    #[error("HTTP {status} from {path}: {body}")]
    Http {
        status: u16,
        path: String,
        body: String,
    },

    /// The API rejected the token.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Request(String),

    /// Failed to parse response.
    #[error("Failed to parse response from {path}: {message}")]
    Parse { path: String, message: String },

    /// No check bundle matched the host search.
    #[error("No check bundle found for host '{0}'")]
    BundleNotFound(String),

    /// More than one check bundle matched the host search.
    #[error("Expected exactly one check bundle for host '{host}', found {count}")]
    AmbiguousBundle { host: String, count: usize },

    /// The client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Request(err.to_string())
        }
    }
}
