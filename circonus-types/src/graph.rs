//! Graph definitions as sent to the Circonus graph endpoint.

use serde::{Deserialize, Serialize};

/// Y axis a datapoint is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "r")]
    Right,
}

/// Kind of metric a datapoint reads.
///
/// Values the API returns that this crate does not know about deserialize as
/// [`MetricType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    #[default]
    Numeric,
    Histogram,
    Text,
    Composite,
    Caql,
    #[serde(other)]
    Unknown,
}

impl MetricType {
    /// Wire name of the type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Histogram => "histogram",
            Self::Text => "text",
            Self::Composite => "composite",
            Self::Caql => "caql",
            Self::Unknown => "unknown",
        }
    }
}

/// How raw values are turned into plotted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Derive {
    #[default]
    Gauge,
    Counter,
    Derive,
}

/// Rendering style of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphStyle {
    Area,
    Line,
}

/// A single plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datapoint {
    /// Numeric id of the check the metric belongs to.
    pub check_id: u64,

    pub metric_name: String,

    pub metric_type: MetricType,

    pub axis: Axis,

    /// Hex color, e.g. `#0000ff`.
    pub color: String,

    #[serde(default)]
    pub derive: Derive,

    /// Legend label.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub data_formula: Option<String>,

    #[serde(default)]
    pub legend_formula: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub stack: Option<u32>,
}

impl Datapoint {
    /// Create a visible, unstacked gauge datapoint labelled with its metric name.
    pub fn new(
        check_id: u64,
        metric_name: impl Into<String>,
        metric_type: MetricType,
        axis: Axis,
        color: impl Into<String>,
    ) -> Self {
        let metric_name = metric_name.into();
        Self {
            check_id,
            name: metric_name.clone(),
            metric_name,
            metric_type,
            axis,
            color: color.into(),
            derive: Derive::Gauge,
            data_formula: None,
            legend_formula: None,
            hidden: false,
            stack: None,
        }
    }

    /// Set the derive mode.
    pub fn derive(mut self, derive: Derive) -> Self {
        self.derive = derive;
        self
    }

    /// Set the legend label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Body of a graph create/update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub datapoints: Vec<Datapoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_left_y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_left_y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_right_y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_right_y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<GraphStyle>,
}

impl GraphDefinition {
    /// Create a builder for a graph with the given title.
    pub fn builder(title: impl Into<String>) -> GraphDefinitionBuilder {
        GraphDefinitionBuilder::new(title)
    }

    /// Whether the graph carries the exact tag `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Builder for [`GraphDefinition`].
#[derive(Debug)]
pub struct GraphDefinitionBuilder {
    graph: GraphDefinition,
}

impl GraphDefinitionBuilder {
    /// Create a new builder.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            graph: GraphDefinition {
                title: title.into(),
                tags: Vec::new(),
                datapoints: Vec::new(),
                min_left_y: None,
                max_left_y: None,
                min_right_y: None,
                max_right_y: None,
                style: None,
            },
        }
    }

    /// Append a tag. Duplicate tags are ignored.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.graph.has_tag(&tag) {
            self.graph.tags.push(tag);
        }
        self
    }

    /// Append a datapoint.
    pub fn datapoint(mut self, datapoint: Datapoint) -> Self {
        self.graph.datapoints.push(datapoint);
        self
    }

    pub fn min_left_y(mut self, value: f64) -> Self {
        self.graph.min_left_y = Some(value);
        self
    }

    pub fn max_left_y(mut self, value: f64) -> Self {
        self.graph.max_left_y = Some(value);
        self
    }

    pub fn min_right_y(mut self, value: f64) -> Self {
        self.graph.min_right_y = Some(value);
        self
    }

    pub fn max_right_y(mut self, value: f64) -> Self {
        self.graph.max_right_y = Some(value);
        self
    }

    pub fn style(mut self, style: GraphStyle) -> Self {
        self.graph.style = Some(style);
        self
    }

    /// Build the graph definition.
    pub fn build(self) -> GraphDefinition {
        self.graph
    }
}
