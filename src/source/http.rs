//! Mirror-backed `Packages` source.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::IndexSource;
use crate::debian::IndexError;

/// Coordinates of a binary package index on a Debian-style mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorLocation {
    pub mirror: String,
    pub dist: String,
    pub component: String,
    pub arch: String,
}

impl MirrorLocation {
    /// `<mirror>/dists/<dist>/<component>/binary-<arch>/Packages`
    pub fn packages_url(&self) -> String {
        format!(
            "{}/dists/{}/{}/binary-{}/Packages",
            self.mirror.trim_end_matches('/'),
            self.dist,
            self.component,
            self.arch
        )
    }
}

/// Downloads the uncompressed `Packages` file from a mirror.
#[derive(Debug)]
pub struct HttpIndexSource {
    client: reqwest::Client,
    url: String,
    description: String,
}

impl HttpIndexSource {
    pub fn new(location: &MirrorLocation, timeout: Duration) -> Result<Self, IndexError> {
        let url = location.packages_url();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("goestools-ops/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IndexError::Fetch {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            description: format!("mirror: {}", url),
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IndexSource for HttpIndexSource {
    async fn fetch(&self) -> Result<String, IndexError> {
        info!(url = %self.url, "Downloading package index");
        let fetch_error = |e: reqwest::Error| IndexError::Fetch {
            url: self.url.clone(),
            message: e.to_string(),
        };

        let response = self.client.get(&self.url).send().await.map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(fetch_error)?;
        debug!(bytes = text.len(), "downloaded package index");
        Ok(text)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
