//! End-to-end provisioning of one host.

use std::io::{self, Write};

use circonus_client::{CirconusApi, ClientError};
use circonus_types::GraphTemplate;
use thiserror::Error;
use tracing::{debug, info};

use super::activation::metrics_to_activate;
use super::builder::GraphBuilder;
use super::plan::plan_graphs;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Check bundle {0} has no checks")]
    NoChecks(String),

    #[error("Check id '{0}' is not numeric")]
    InvalidCheckId(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// What to provision.
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Host name the check bundle was created for.
    pub target: String,

    /// Prepended to every graph title.
    pub prefix: String,

    /// Tag category that marks managed graphs.
    pub tag_category: String,

    /// Report the plan without changing anything.
    pub dry_run: bool,
}

/// Outcome of a provisioning run. Graphs are listed by catalog key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub check_id: u64,
    pub activated: Vec<String>,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub deleted: Vec<String>,
}

/// Bring the account in line with `catalog` for `options.target`.
///
/// Progress lines are written to `out` before each mutating call so a
/// failure part-way through still shows what was done.
pub async fn provision<A, W>(
    api: &A,
    catalog: &[GraphTemplate],
    options: &ProvisionOptions,
    out: &mut W,
) -> Result<ProvisionReport, ProvisionError>
where
    A: CirconusApi + ?Sized,
    W: Write,
{
    let bundle = api.get_check_bundle_for_host(&options.target).await?;
    let check = bundle
        .first_check_id()
        .ok_or_else(|| ProvisionError::NoChecks(bundle.cid.clone()))?;
    let check_id: u64 = check
        .parse()
        .map_err(|_| ProvisionError::InvalidCheckId(check.to_string()))?;
    writeln!(out, "Using check with ID: {check_id}")?;

    let mut report = ProvisionReport {
        check_id,
        ..Default::default()
    };

    let activate = metrics_to_activate(&bundle.metrics);
    report.activated = activate.iter().map(|m| m.name.clone()).collect();
    if !activate.is_empty() {
        info!(count = activate.len(), bundle = bundle.id(), "activating metrics");
        for metric in &activate {
            writeln!(out, "Activate metric: {}", metric.name)?;
        }
        if !options.dry_run {
            api.put_check_bundle_metrics(&bundle, &activate).await?;
        }
    }

    let remote = api
        .get_graphs_for_check(check_id, &options.tag_category)
        .await?;
    debug!(count = remote.len(), "found managed graphs");

    let plan = plan_graphs(catalog, remote, &options.tag_category);
    let builder = GraphBuilder::new(
        &bundle.display_name,
        check_id,
        &options.prefix,
        &options.tag_category,
    );

    for template in &plan.create {
        writeln!(out, "Create graph: {}", template.key)?;
        if !options.dry_run {
            api.create_graph(&builder.build(template)).await?;
        }
        report.created.push(template.key.to_string());
    }

    for (template, graph) in &plan.update {
        writeln!(out, "Update graph: {}", template.key)?;
        if !options.dry_run {
            api.update_graph(&graph.cid, &builder.build(template)).await?;
        }
        report.updated.push(template.key.to_string());
    }

    for (key, graph) in &plan.delete {
        writeln!(out, "Delete graph: {key}")?;
        if !options.dry_run {
            api.delete_graph(&graph.cid).await?;
        }
        report.deleted.push(key.clone());
    }

    info!(
        check_id,
        created = report.created.len(),
        updated = report.updated.len(),
        deleted = report.deleted.len(),
        dry_run = options.dry_run,
        "provisioning finished"
    );

    Ok(report)
}
