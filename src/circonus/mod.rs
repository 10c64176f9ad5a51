//! Circonus provisioning for `goesrecv` metrics.
//!
//! All graphs created here carry a `goestools:<key>` tag. Graphs in that tag
//! category that are not in [`catalog::GRAPHS`] get deleted, including ones
//! created by hand.
//!
//! ```text
//! check bundle ──▶ metrics_to_activate ──▶ PUT /check_bundle_metrics
//!      │
//!      └─▶ first check id ──▶ GET /graph ──▶ plan_graphs ──▶ create / update / delete
//! ```

pub mod activation;
pub mod builder;
pub mod catalog;
pub mod plan;
pub mod provision;

pub use activation::metrics_to_activate;
pub use builder::GraphBuilder;
pub use plan::{plan_graphs, GraphPlan};
pub use provision::{provision, ProvisionError, ProvisionOptions, ProvisionReport};
