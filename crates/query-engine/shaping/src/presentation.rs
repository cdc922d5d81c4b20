//! What the result shaper produces.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// A result set ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Presentation {
    Table { title: String, table: Table },
    /// There is nothing to show. Presented as an explicit empty state.
    Empty { title: String },
    /// A single scalar. `None` when the result had no value to show.
    Metric {
        title: String,
        value: Option<serde_json::Value>,
    },
    /// A single number on a 0 to 100 dial. `None` when the result had no number to show.
    Gauge { title: String, value: Option<f64> },
    Chart(Chart),
    /// A visualization type we cannot present. Presented as a placeholder.
    Unsupported { title: String },
}

/// Rows laid out under a fixed list of headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub chart_kind: ChartKind,
    pub title: String,
    pub points: Vec<Point>,
    pub options: ChartOptions,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: serde_json::Value,
    pub y: serde_json::Value,
}

/// Drawing hints passed through to the chart renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
}
