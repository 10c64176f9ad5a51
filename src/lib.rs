//! # goestools-ops
//!
//! Operator tooling for goestools receiver stations.
//!
//! Two command-line tools are built on this library:
//!
//! - `circonus-configure` activates the `goesrecv` statsd metrics on a
//!   host's Circonus check bundle and keeps a fixed set of graphs in sync.
//! - `list-raspbian-urls` resolves the dependency closure of one or more
//!   Raspbian packages and prints their download URLs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ circonus-configure                                               │
//! │  ┌──────────┐    ┌────────────┐    ┌─────────────────────────┐   │
//! │  │ settings │───▶│  circonus  │───▶│ circonus-client (HTTP)  │   │
//! │  └──────────┘    │ (catalog,  │    └─────────────────────────┘   │
//! │                  │  plan)     │                                  │
//! │                  └────────────┘                                  │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ list-raspbian-urls                                               │
//! │  ┌──────────┐    ┌────────────┐    ┌─────────────────────────┐   │
//! │  │ source   │───▶│   debian   │───▶│ URLs on stdout          │   │
//! │  │ (input)  │    │ (index,    │    └─────────────────────────┘   │
//! │  └──────────┘    │  resolve)  │                                  │
//! │                  └────────────┘                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`circonus`]**: graph catalog, graph building, reconciliation and the
//!   [`provision`](circonus::provision) driver over any [`CirconusApi`]
//! - **[`debian`]**: `Packages` index parsing and breadth-first dependency
//!   resolution
//! - **[`source`]**: where the index text comes from ([`IndexSource`] trait)
//! - **[`settings`]**, **[`logging`]**, **[`duration`]**: shared plumbing
//!   for the binaries
//!
//! ## Usage
//!
//! ```
//! use goestools_ops::debian::{PackageIndex, Resolver};
//!
//! let index = PackageIndex::parse(
//!     "Package: goestools\nDepends: libc6\nFilename: pool/g.deb\n\n\
//!      Package: libc6\nFilename: pool/l.deb\n",
//! );
//! let resolution = Resolver::new(&index).resolve(["goestools"]).unwrap();
//! assert_eq!(
//!     resolution.urls("http://mirror/raspbian"),
//!     vec!["http://mirror/raspbian/pool/g.deb", "http://mirror/raspbian/pool/l.deb"]
//! );
//! ```

pub mod circonus;
pub mod debian;
pub mod duration;
pub mod logging;
pub mod settings;
pub mod source;

pub use circonus_client::{CirconusApi, CirconusClient, ClientError};
pub use debian::{IndexError, PackageIndex, Resolution, Resolver};
pub use source::{FileIndexSource, HttpIndexSource, IndexSource, MirrorLocation};
