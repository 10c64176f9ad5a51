use circonus_types::{Metric, MetricStatus};

use super::catalog::desired_metric_type;

/// Metrics of a bundle that must be switched on before graphs can plot them.
///
/// Returns copies of the bundle's metrics that goestools wants but that are
/// not yet active with the right type, already set to `active` and the
/// wanted type. Metrics the catalog does not mention are never touched.
pub fn metrics_to_activate(metrics: &[Metric]) -> Vec<Metric> {
    metrics
        .iter()
        .filter_map(|metric| {
            let wanted = desired_metric_type(&metric.name)?;
            if metric.is_active_as(wanted) {
                return None;
            }
            let mut metric = metric.clone();
            metric.status = MetricStatus::Active;
            metric.metric_type = wanted;
            Some(metric)
        })
        .collect()
}
