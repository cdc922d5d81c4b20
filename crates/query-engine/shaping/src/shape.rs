//! Shape result rows for presentation.
//!
//! Shaping never fails: rows that do not fit the requested visualization degrade to an
//! empty state rather than an error.

use query_engine_model::model;

use crate::presentation::{Chart, ChartKind, ChartOptions, Point, Presentation, Table};

const GAUGE_MIN: f64 = 0.0;
const GAUGE_MAX: f64 = 100.0;

/// Shape `rows` according to `config`.
pub fn shape(rows: &[model::Record], config: &model::VisualizationConfig) -> Presentation {
    let title = config.title.clone();
    let presentation = match &config.visualization_type {
        model::VisualizationType::Table => match tabulate(rows) {
            None => Presentation::Empty { title },
            Some(table) => Presentation::Table { title, table },
        },
        model::VisualizationType::Metric | model::VisualizationType::Kpi => {
            Presentation::Metric {
                title,
                value: first_value(rows),
            }
        }
        model::VisualizationType::Gauge => Presentation::Gauge {
            title,
            value: gauge_value(rows, config),
        },
        model::VisualizationType::Bar => chart(ChartKind::Bar, rows, config),
        model::VisualizationType::Line => chart(ChartKind::Line, rows, config),
        model::VisualizationType::Pie => chart(ChartKind::Pie, rows, config),
        model::VisualizationType::Area => chart(ChartKind::Area, rows, config),
        model::VisualizationType::Unsupported(_) => Presentation::Unsupported { title },
    };

    tracing::debug!(
        rows = rows.len(),
        visualization = ?config.visualization_type,
        "Shaped result"
    );

    presentation
}

/// Lay rows out as a table. Headers are the columns of the first row. A row missing
/// one of them shows `null` in its place, and columns only later rows have are dropped.
///
/// Returns `None` when there are no rows.
pub fn tabulate(rows: &[model::Record]) -> Option<Table> {
    let headers: Vec<String> = rows.first()?.keys().cloned().collect();
    let rows = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| row.get(header).cloned().unwrap_or(serde_json::Value::Null))
                .collect()
        })
        .collect();
    Some(Table { headers, rows })
}

fn first_value(rows: &[model::Record]) -> Option<serde_json::Value> {
    rows.first()?.values().next().cloned()
}

/// The y axis field of the first row, or its first value when the row has no such field,
/// held to the dial's range.
fn gauge_value(rows: &[model::Record], config: &model::VisualizationConfig) -> Option<f64> {
    let row = rows.first()?;
    let value = row
        .get(config.y_axis_or_default())
        .or_else(|| row.values().next())?;
    Some(value.as_f64()?.clamp(GAUGE_MIN, GAUGE_MAX))
}

fn chart(
    chart_kind: ChartKind,
    rows: &[model::Record],
    config: &model::VisualizationConfig,
) -> Presentation {
    let x_axis = config.x_axis_or_default();
    let y_axis = config.y_axis_or_default();

    let points: Vec<Point> = rows
        .iter()
        .filter_map(|row| {
            Some(Point {
                x: row.get(x_axis)?.clone(),
                y: row.get(y_axis)?.clone(),
            })
        })
        .collect();

    if points.len() < rows.len() {
        tracing::warn!(
            skipped = rows.len() - points.len(),
            x_axis,
            y_axis,
            "Rows without both axis fields were left out of the chart"
        );
    }

    if points.is_empty() {
        return Presentation::Empty {
            title: config.title.clone(),
        };
    }

    Presentation::Chart(Chart {
        chart_kind,
        title: config.title.clone(),
        points,
        options: ChartOptions {
            color_scheme: config.color_scheme.clone(),
            show_labels: config.show_labels,
            show_legend: config.show_legend,
        },
    })
}
