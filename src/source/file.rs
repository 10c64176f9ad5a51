//! Local `Packages` file source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::IndexSource;
use crate::debian::IndexError;

/// Reads an already-downloaded `Packages` file.
#[derive(Debug)]
pub struct FileIndexSource {
    path: PathBuf,
    description: String,
}

impl FileIndexSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl IndexSource for FileIndexSource {
    async fn fetch(&self) -> Result<String, IndexError> {
        debug!(path = %self.path.display(), "reading package index");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| IndexError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn description(&self) -> &str {
        &self.description
    }
}
