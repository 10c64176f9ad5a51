//! Static graph templates.
//!
//! A template carries everything about a graph that does not depend on the
//! account it is deployed to. Check ids, legend names and title prefixes are
//! filled in when the template is turned into a [`GraphDefinition`].
//!
//! [`GraphDefinition`]: crate::GraphDefinition

use crate::{Axis, Derive, GraphStyle, MetricType};

/// Placeholder in [`GraphTemplate::title`] replaced by the caller's prefix.
pub const TITLE_PREFIX_PLACEHOLDER: &str = "{prefix}";

/// One series of a [`GraphTemplate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatapointTemplate {
    pub metric_name: &'static str,
    pub metric_type: MetricType,
    pub axis: Axis,
    pub color: &'static str,
    pub derive: Derive,
}

/// A named graph in a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphTemplate {
    /// Catalog key. Used as the value of the ownership tag.
    pub key: &'static str,

    /// Title with an optional `{prefix}` placeholder.
    pub title: &'static str,

    pub datapoints: &'static [DatapointTemplate],

    pub min_left_y: Option<f64>,
    pub max_left_y: Option<f64>,
    pub min_right_y: Option<f64>,
    pub max_right_y: Option<f64>,

    pub style: Option<GraphStyle>,
}

impl GraphTemplate {
    /// Render the title for the given prefix.
    pub fn title_with_prefix(&self, prefix: &str) -> String {
        self.title.replace(TITLE_PREFIX_PLACEHOLDER, prefix)
    }

    /// Names of all metrics the graph plots.
    pub fn metric_names(&self) -> impl Iterator<Item = &'static str> {
        self.datapoints.iter().map(|d| d.metric_name)
    }
}

/// Find a template by key.
pub fn find_template<'a>(catalog: &'a [GraphTemplate], key: &str) -> Option<&'a GraphTemplate> {
    catalog.iter().find(|t| t.key == key)
}
