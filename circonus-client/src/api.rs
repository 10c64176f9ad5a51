use async_trait::async_trait;
use circonus_types::{CheckBundle, CheckBundleMetrics, GraphDefinition, Metric, RemoteGraph};

use crate::ClientError;

/// The Circonus operations needed to provision graphs for a check.
///
/// [`CirconusClient`](crate::CirconusClient) implements this over HTTP.
/// Callers that only need the operations should take `&dyn CirconusApi` or a
/// generic bound so the transport can be swapped out.
#[async_trait]
pub trait CirconusApi: Send + Sync {
    /// Find the single check bundle whose host is `host`, fully expanded.
    async fn get_check_bundle_for_host(&self, host: &str) -> Result<CheckBundle, ClientError>;

    /// Replace the given metrics of a bundle.
    async fn put_check_bundle_metrics(
        &self,
        bundle: &CheckBundle,
        metrics: &[Metric],
    ) -> Result<CheckBundleMetrics, ClientError>;

    /// List graphs of `check_id` carrying any tag in `tag_category`.
    async fn get_graphs_for_check(
        &self,
        check_id: u64,
        tag_category: &str,
    ) -> Result<Vec<RemoteGraph>, ClientError>;

    async fn create_graph(&self, graph: &GraphDefinition) -> Result<RemoteGraph, ClientError>;

    /// Overwrite the graph at `cid`.
    async fn update_graph(
        &self,
        cid: &str,
        graph: &GraphDefinition,
    ) -> Result<RemoteGraph, ClientError>;

    async fn delete_graph(&self, cid: &str) -> Result<(), ClientError>;
}
