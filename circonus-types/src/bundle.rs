//! Entities owned by the Circonus account: check bundles, their metrics, and
//! graphs as returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{tags_to_map, MetricType};

/// Last path segment of a Circonus cid, e.g. `"1234"` for `"/check/1234"`.
pub fn cid_id(cid: &str) -> &str {
    cid.rsplit('/').next().unwrap_or(cid)
}

/// Collection state of a metric within a check bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Active,
    #[default]
    Available,
    #[serde(other)]
    Unknown,
}

/// A metric of a check bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,

    #[serde(default)]
    pub status: MetricStatus,

    #[serde(rename = "type", default)]
    pub metric_type: MetricType,

    /// Fields not modelled here, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Metric {
    pub fn new(name: impl Into<String>, metric_type: MetricType, status: MetricStatus) -> Self {
        Self {
            name: name.into(),
            status,
            metric_type,
            extra: Map::new(),
        }
    }

    /// Whether the metric is already collected as `metric_type`.
    pub fn is_active_as(&self, metric_type: MetricType) -> bool {
        self.status == MetricStatus::Active && self.metric_type == metric_type
    }
}

/// A check bundle: the set of checks and metrics configured for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckBundle {
    #[serde(rename = "_cid")]
    pub cid: String,

    /// Cids of the checks instantiated from this bundle, e.g. `/check/1234`.
    #[serde(rename = "_checks", default)]
    pub checks: Vec<String>,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub metrics: Vec<Metric>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CheckBundle {
    /// Numeric part of the bundle cid.
    pub fn id(&self) -> &str {
        cid_id(&self.cid)
    }

    /// Id of the first check of the bundle.
    pub fn first_check_id(&self) -> Option<&str> {
        self.checks.first().map(|c| cid_id(c))
    }
}

/// Body and response of `PUT /check_bundle_metrics/<id>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckBundleMetrics {
    #[serde(rename = "_cid", default, skip_serializing_if = "String::is_empty")]
    pub cid: String,

    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// A graph as returned by `GET /graph`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteGraph {
    #[serde(rename = "_cid")]
    pub cid: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteGraph {
    /// Value of the tag in `category`, if the graph carries one.
    pub fn tag_value(&self, category: &str) -> Option<String> {
        tags_to_map(self.tags.iter().map(String::as_str)).remove(category)
    }
}
