//! Where a `Packages` index comes from.
//!
//! The resolver only needs the index text, so the mirror and a local file
//! are interchangeable behind [`IndexSource`].

mod file;
mod http;

pub use file::FileIndexSource;
pub use http::{HttpIndexSource, MirrorLocation};

use std::fmt::Debug;

use async_trait::async_trait;

use crate::debian::IndexError;

/// Trait for loading the text of a `Packages` index.
///
/// # Example
///
/// ```no_run
/// use goestools_ops::source::{FileIndexSource, IndexSource};
///
/// # tokio_test::block_on(async {
/// let source = FileIndexSource::new("Packages");
/// let text = source.fetch().await?;
/// println!("{} bytes from {}", text.len(), source.description());
/// # Ok::<(), goestools_ops::debian::IndexError>(())
/// # });
/// ```
#[async_trait]
pub trait IndexSource: Send + Sync + Debug {
    /// Load the full index text.
    async fn fetch(&self) -> Result<String, IndexError>;

    /// Human-readable description, used in log messages.
    fn description(&self) -> &str;
}
