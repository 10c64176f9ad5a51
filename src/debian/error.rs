use std::path::PathBuf;

use thiserror::Error;

/// Errors loading or walking a package index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A package needed for output lacks a required field.
    #[error("Package '{package}' has no {field} field")]
    MissingField {
        package: String,
        field: &'static str,
    },

    #[error("Failed to read package index {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch package index from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Mirror returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}
