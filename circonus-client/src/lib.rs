//! # circonus-client
//!
//! Async client for the parts of the Circonus v2 REST API that goestools
//! uses to provision an account: finding a host's check bundle, activating
//! metrics on it, and managing graphs.
//!
//! Every call fails fast. A non-2xx response becomes a [`ClientError`] and
//! nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use circonus_client::{CirconusApi, CirconusClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CirconusClient::builder()
//!         .token("00000000-0000-0000-0000-000000000000")
//!         .build()?;
//!
//!     let bundle = client.get_check_bundle_for_host("goes-rx.local").await?;
//!     println!("Bundle {} has {} metrics", bundle.id(), bundle.metrics.len());
//!     Ok(())
//! }
//! ```

mod api;
mod client;
pub mod error;

pub use api::CirconusApi;
pub use client::{CirconusClient, CirconusClientBuilder, DEFAULT_API_URL, DEFAULT_APP_NAME};
pub use error::ClientError;

// Re-export types for convenience
pub use circonus_types::{CheckBundle, CheckBundleMetrics, GraphDefinition, Metric, RemoteGraph};
