//! How a result set should be presented.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Field read for the x coordinate of a chart when `xAxis` is not set.
pub const DEFAULT_X_AXIS: &str = "label";
/// Field read for the y coordinate of a chart when `yAxis` is not set.
pub const DEFAULT_Y_AXIS: &str = "value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationConfig {
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "VisualizationType::is_missing"
    )]
    pub visualization_type: VisualizationType,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    /// Presentation settings the builder does not read itself, such as `colors`, `width`,
    /// `height` or `showGrid`. Kept so saved queries are written back as they were read.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VisualizationConfig {
    pub fn new(visualization_type: VisualizationType, title: impl Into<String>) -> Self {
        VisualizationConfig {
            visualization_type,
            title: title.into(),
            x_axis: None,
            y_axis: None,
            color_scheme: None,
            show_labels: None,
            show_legend: None,
            extra: serde_json::Map::new(),
        }
    }

    /// A plain table, which is what a freshly opened builder shows.
    pub fn table(title: impl Into<String>) -> Self {
        Self::new(VisualizationType::Table, title)
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        self.x_axis = Some(x_axis.into());
        self.y_axis = Some(y_axis.into());
        self
    }

    pub fn x_axis_or_default(&self) -> &str {
        self.x_axis.as_deref().unwrap_or(DEFAULT_X_AXIS)
    }

    pub fn y_axis_or_default(&self) -> &str {
        self.y_axis.as_deref().unwrap_or(DEFAULT_Y_AXIS)
    }
}

/// The `type` of a visualization, written as its lowercase name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum VisualizationType {
    Table,
    Bar,
    Line,
    Pie,
    Area,
    /// A single value on a 0 to 100 dial.
    Gauge,
    Metric,
    /// Another name for [`VisualizationType::Metric`].
    Kpi,
    /// Any type this builder cannot present yet, holding the name it was stored under.
    /// An empty name means the type was missing.
    Unsupported(String),
}

impl Default for VisualizationType {
    fn default() -> Self {
        VisualizationType::Unsupported(String::new())
    }
}

impl VisualizationType {
    /// Every type the builder can present.
    pub const SUPPORTED: [VisualizationType; 8] = [
        VisualizationType::Table,
        VisualizationType::Bar,
        VisualizationType::Line,
        VisualizationType::Pie,
        VisualizationType::Area,
        VisualizationType::Gauge,
        VisualizationType::Metric,
        VisualizationType::Kpi,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            VisualizationType::Table => "table",
            VisualizationType::Bar => "bar",
            VisualizationType::Line => "line",
            VisualizationType::Pie => "pie",
            VisualizationType::Area => "area",
            VisualizationType::Gauge => "gauge",
            VisualizationType::Metric => "metric",
            VisualizationType::Kpi => "kpi",
            VisualizationType::Unsupported(name) => name,
        }
    }

    fn from_name(name: String) -> Self {
        match name.as_str() {
            "table" => VisualizationType::Table,
            "bar" => VisualizationType::Bar,
            "line" => VisualizationType::Line,
            "pie" => VisualizationType::Pie,
            "area" => VisualizationType::Area,
            "gauge" => VisualizationType::Gauge,
            "metric" => VisualizationType::Metric,
            "kpi" => VisualizationType::Kpi,
            _ => VisualizationType::Unsupported(name),
        }
    }

    /// Whether results are presented as a series of `{x, y}` points.
    pub fn is_chart(&self) -> bool {
        matches!(
            self,
            VisualizationType::Bar
                | VisualizationType::Line
                | VisualizationType::Pie
                | VisualizationType::Area
        )
    }

    fn is_missing(&self) -> bool {
        matches!(self, VisualizationType::Unsupported(name) if name.is_empty())
    }
}

impl Serialize for VisualizationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VisualizationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(VisualizationType::from_name)
    }
}

impl JsonSchema for VisualizationType {
    fn schema_name() -> String {
        "VisualizationType".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut schema = gen.subschema_for::<String>().into_object();
        schema.metadata().description = Some(
            "One of table, bar, line, pie, area, gauge, metric or kpi. Other names are kept \
             but presented as unsupported."
                .to_string(),
        );
        schema.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_missing_types_are_unsupported() {
        let heatmap: VisualizationConfig =
            serde_json::from_str(r#"{"type": "heatmap", "title": "Load"}"#).unwrap();
        assert_eq!(
            heatmap.visualization_type,
            VisualizationType::Unsupported("heatmap".to_string())
        );

        let untyped: VisualizationConfig = serde_json::from_str(r#"{"title": "Load"}"#).unwrap();
        assert_eq!(untyped.visualization_type, VisualizationType::default());
    }

    #[test]
    fn gauge_and_kpi_are_known() {
        let gauge: VisualizationConfig =
            serde_json::from_str(r#"{"type": "gauge", "title": "Load"}"#).unwrap();
        assert_eq!(gauge.visualization_type, VisualizationType::Gauge);

        let kpi: VisualizationConfig =
            serde_json::from_str(r#"{"type": "kpi", "title": "Revenue"}"#).unwrap();
        assert_eq!(kpi.visualization_type, VisualizationType::Kpi);
    }

    #[test]
    fn stored_configurations_are_written_back_unchanged() {
        for stored in [
            serde_json::json!({
                "type": "gauge",
                "title": "Load",
                "colors": ["#f00"],
                "showGrid": true,
                "width": 100,
                "height": 400
            }),
            serde_json::json!({"type": "heatmap", "title": "Load", "showLegend": false}),
            serde_json::json!({"type": "kpi", "title": "Revenue", "yAxis": "total"}),
            serde_json::json!({"title": "Untyped"}),
        ] {
            let config: VisualizationConfig = serde_json::from_value(stored.clone()).unwrap();
            similar_asserts::assert_eq!(serde_json::to_value(&config).unwrap(), stored);
        }
    }

    #[test]
    fn axes_fall_back_to_label_and_value() {
        let config = VisualizationConfig::new(VisualizationType::Bar, "Sales");
        assert_eq!(config.x_axis_or_default(), "label");
        assert_eq!(config.y_axis_or_default(), "value");

        let config = config.with_axes("month", "total");
        assert_eq!(config.x_axis_or_default(), "month");
        assert_eq!(config.y_axis_or_default(), "total");
    }
}
