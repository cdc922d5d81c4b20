use std::sync::Mutex;

use query_engine_model::model;
use query_engine_shaping::{
    export, shape, ChartKind, ExportError, ExportFormat, Exporter, Point, Presentation, Table,
};
use tests_common::fixtures;

#[test]
fn empty_results_are_an_explicit_empty_state() {
    let config = model::VisualizationConfig::table("Orders");
    assert_eq!(
        shape(&[], &config),
        Presentation::Empty {
            title: "Orders".to_string()
        }
    );
}

#[test]
fn tables_keep_the_endpoint_column_order() {
    let config = model::VisualizationConfig::table("Revenue");
    similar_asserts::assert_eq!(
        shape(&fixtures::revenue_rows(), &config),
        Presentation::Table {
            title: "Revenue".to_string(),
            table: Table {
                headers: vec!["label".to_string(), "value".to_string()],
                rows: vec![
                    vec!["north".into(), 1200.into()],
                    vec!["south".into(), 800.into()],
                    vec!["west".into(), 450.into()],
                ],
            },
        }
    );
}

#[test]
fn charts_default_to_label_and_value() {
    let config: model::VisualizationConfig = serde_json::from_value(serde_json::json!({
        "type": "bar",
        "title": "Revenue",
        "colorScheme": "blues",
        "showLegend": false
    }))
    .unwrap();

    let Presentation::Chart(chart) = shape(&fixtures::revenue_rows(), &config) else {
        panic!("expected a chart");
    };

    assert_eq!(chart.chart_kind, ChartKind::Bar);
    assert_eq!(
        chart.points.first(),
        Some(&Point {
            x: "north".into(),
            y: 1200.into()
        })
    );
    assert_eq!(chart.points.len(), 3);
    assert_eq!(chart.options.color_scheme.as_deref(), Some("blues"));
    assert_eq!(chart.options.show_legend, Some(false));
    assert_eq!(chart.options.show_labels, None);
}

#[test]
fn every_chart_type_is_a_chart() {
    for visualization_type in model::VisualizationType::SUPPORTED
        .into_iter()
        .filter(model::VisualizationType::is_chart)
    {
        let config = model::VisualizationConfig::new(visualization_type.clone(), "Revenue");
        assert!(
            matches!(
                shape(&fixtures::revenue_rows(), &config),
                Presentation::Chart(_)
            ),
            "{visualization_type:?} did not shape to a chart"
        );
    }
}

#[test]
fn presentations_serialize_with_their_kind() {
    let config = model::VisualizationConfig::new(model::VisualizationType::Metric, "Top region");
    let json = serde_json::to_value(shape(&fixtures::revenue_rows(), &config)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "metric", "title": "Top region", "value": "north"})
    );
}

#[derive(Default)]
struct RecordingExporter {
    calls: Mutex<Vec<(ExportFormat, String, Vec<String>, usize)>>,
}

#[async_trait::async_trait]
impl Exporter for RecordingExporter {
    async fn export_pdf(
        &self,
        rows: &[model::Record],
        title: &str,
        columns: &[String],
    ) -> Result<(), ExportError> {
        self.calls.lock().unwrap().push((
            ExportFormat::Pdf,
            title.to_string(),
            columns.to_vec(),
            rows.len(),
        ));
        Ok(())
    }

    async fn export_excel(&self, rows: &[model::Record], title: &str) -> Result<(), ExportError> {
        self.calls
            .lock()
            .unwrap()
            .push((ExportFormat::Excel, title.to_string(), vec![], rows.len()));
        Ok(())
    }
}

#[tokio::test]
async fn pdf_exports_list_the_table_headers() {
    let exporter = RecordingExporter::default();

    export(
        &exporter,
        ExportFormat::Pdf,
        &fixtures::revenue_rows(),
        "Revenue",
    )
    .await
    .unwrap();
    export(
        &exporter,
        ExportFormat::Excel,
        &fixtures::revenue_rows(),
        "Revenue",
    )
    .await
    .unwrap();

    assert_eq!(
        *exporter.calls.lock().unwrap(),
        vec![
            (
                ExportFormat::Pdf,
                "Revenue".to_string(),
                vec!["label".to_string(), "value".to_string()],
                3
            ),
            (ExportFormat::Excel, "Revenue".to_string(), vec![], 3),
        ]
    );
}
