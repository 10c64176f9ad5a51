//! The graphs and metrics goestools manages on a Circonus account.
//!
//! `goesrecv` reports through statsd, so every metric name in the host's
//! check bundle starts with `statsd` and a backtick.

use circonus_types::{Axis, DatapointTemplate, Derive, GraphStyle, GraphTemplate, MetricType};

/// Metrics collected as plain numeric gauges.
pub const NUMERIC_METRICS: &[&str] = &[
    "statsd`frequency",
    "statsd`gain",
    "statsd`omega",
    "statsd`packets_dropped",
    "statsd`packets_ok",
];

/// Metrics collected as histograms.
pub const HISTOGRAM_METRICS: &[&str] = &["statsd`reed_solomon_errors", "statsd`viterbi_errors"];

const VITERBI_ERRORS: DatapointTemplate = DatapointTemplate {
    metric_name: "statsd`viterbi_errors",
    metric_type: MetricType::Histogram,
    axis: Axis::Left,
    color: "#0000ff",
    derive: Derive::Gauge,
};

/// Every graph the tool creates, in creation order.
pub const GRAPHS: &[GraphTemplate] = &[
    GraphTemplate {
        key: "viterbi",
        title: "{prefix} Viterbi errors",
        datapoints: &[VITERBI_ERRORS],
        min_left_y: None,
        max_left_y: Some(500.0),
        min_right_y: None,
        max_right_y: None,
        style: None,
    },
    GraphTemplate {
        key: "viterbi_and_drops",
        title: "{prefix} Viterbi errors and drops",
        datapoints: &[
            VITERBI_ERRORS,
            DatapointTemplate {
                metric_name: "statsd`packets_dropped",
                metric_type: MetricType::Numeric,
                axis: Axis::Right,
                color: "#ff0000",
                derive: Derive::Gauge,
            },
        ],
        min_left_y: None,
        max_left_y: Some(500.0),
        min_right_y: Some(0.0),
        max_right_y: None,
        style: None,
    },
    GraphTemplate {
        key: "reed_solomon",
        title: "{prefix} Reed-Solomon errors",
        datapoints: &[DatapointTemplate {
            metric_name: "statsd`reed_solomon_errors",
            metric_type: MetricType::Histogram,
            axis: Axis::Left,
            color: "#ff0000",
            derive: Derive::Gauge,
        }],
        min_left_y: None,
        max_left_y: Some(75.0),
        min_right_y: None,
        max_right_y: None,
        style: None,
    },
    GraphTemplate {
        key: "demodulator",
        title: "{prefix} demodulator",
        datapoints: &[
            DatapointTemplate {
                metric_name: "statsd`frequency",
                metric_type: MetricType::Numeric,
                axis: Axis::Left,
                color: "#0000ff",
                derive: Derive::Gauge,
            },
            DatapointTemplate {
                metric_name: "statsd`omega",
                metric_type: MetricType::Numeric,
                axis: Axis::Right,
                color: "#0000ff",
                derive: Derive::Gauge,
            },
        ],
        min_left_y: Some(-10000.0),
        max_left_y: Some(10000.0),
        min_right_y: None,
        max_right_y: None,
        style: Some(GraphStyle::Line),
    },
];

/// The type `name` should be collected as, if goestools wants it at all.
pub fn desired_metric_type(name: &str) -> Option<MetricType> {
    if NUMERIC_METRICS.contains(&name) {
        Some(MetricType::Numeric)
    } else if HISTOGRAM_METRICS.contains(&name) {
        Some(MetricType::Histogram)
    } else {
        None
    }
}
