//! # circonus-types
//!
//! Types for the slice of the Circonus v2 API that goestools manages. This
//! crate has no HTTP code; it only describes what goes over the wire and
//! the static templates graphs are built from.
//!
//! ## Overview
//!
//! - **Graph definitions** ([`GraphDefinition`], [`Datapoint`]): the bodies
//!   sent to `POST /graph` and `PUT /graph/<id>`
//! - **Templates** ([`GraphTemplate`], [`DatapointTemplate`]): immutable,
//!   `const`-constructible descriptions of the graphs a tool wants to exist
//! - **Remote entities** ([`CheckBundle`], [`Metric`], [`RemoteGraph`]): what
//!   the API returns. Fields this crate does not model are kept in an
//!   `extra` map so that writing an entity back never drops remote data
//! - **Tags** ([`Tag`]): `category:value` pairs used to mark managed graphs
//!
//! ## Example
//!
//! ```rust
//! use circonus_types::{Axis, Datapoint, GraphDefinition, MetricType};
//!
//! let graph = GraphDefinition::builder("station Viterbi errors")
//!     .tag("goestools:viterbi")
//!     .max_left_y(500.0)
//!     .datapoint(Datapoint::new(
//!         1234,
//!         "statsd`viterbi_errors",
//!         MetricType::Histogram,
//!         Axis::Left,
//!         "#0000ff",
//!     ))
//!     .build();
//!
//! assert_eq!(graph.datapoints.len(), 1);
//! assert_eq!(graph.tags, vec!["goestools:viterbi".to_string()]);
//! ```

mod bundle;
mod graph;
mod tag;
mod template;

pub use bundle::*;
pub use graph::*;
pub use tag::*;
pub use template::*;

/// Tag category that marks graphs owned by goestools.
///
/// Graphs tagged `goestools:<name>` whose name is not in the catalog are
/// considered stale and get deleted.
pub const DEFAULT_TAG_CATEGORY: &str = "goestools";
