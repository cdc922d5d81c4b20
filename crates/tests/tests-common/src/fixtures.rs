//! Models and rows used across test suites.

use query_engine_model::model;

/// Build a row from `(column, value)` pairs, keeping their order.
pub fn row(pairs: &[(&str, serde_json::Value)]) -> model::Record {
    pairs
        .iter()
        .map(|(column, value)| ((*column).to_string(), value.clone()))
        .collect()
}

/// Revenue per region for orders that are not void.
pub fn revenue_by_region() -> model::QueryModel {
    model::QueryModel {
        tables: vec!["orders".to_string()],
        columns: vec![
            model::SelectedColumn::new("orders", "region").aliased("label"),
            model::SelectedColumn::new("orders", "amount")
                .aggregated(model::Aggregation::Sum)
                .aliased("value"),
        ],
        filters: vec![model::Filter::new(
            "status",
            model::FilterOperator::NotEquals,
            model::UnsafeLiteral::new("void"),
        )],
        group_by: vec!["orders.region".to_string()],
        order_by: vec![model::OrderBy {
            column: "value".to_string(),
            direction: model::OrderDirection::Desc,
        }],
        ..model::QueryModel::empty()
    }
}

/// The rows `revenue_by_region` returns.
pub fn revenue_rows() -> Vec<model::Record> {
    vec![
        row(&[("label", "north".into()), ("value", 1200.into())]),
        row(&[("label", "south".into()), ("value", 800.into())]),
        row(&[("label", "west".into()), ("value", 450.into())]),
    ]
}

/// A connection backed by a database.
pub fn warehouse() -> model::Connection {
    model::Connection {
        id: "warehouse".to_string(),
        name: "Warehouse".to_string(),
        connection_type: model::ConnectionType::Database,
        config: serde_json::json!({"host": "localhost", "database": "sales"}),
    }
}
