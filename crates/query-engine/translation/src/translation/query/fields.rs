//! Handle the translation of the projection.

use query_engine_model::model;
use query_engine_sql::sql;

/// Translate the selected columns to a select list. No columns means every column.
pub(crate) fn translate_fields(columns: &[model::SelectedColumn]) -> sql::ast::SelectList {
    if columns.is_empty() {
        return sql::ast::SelectList::SelectStar;
    }

    sql::ast::SelectList::SelectList(
        columns
            .iter()
            .map(|column| {
                let reference =
                    sql::helpers::make_column(column.table.clone(), column.column.clone());
                let expression = match column.aggregation {
                    None => reference,
                    Some(aggregation) => sql::ast::Expression::FunctionCall {
                        function: translate_aggregation(aggregation),
                        args: vec![reference],
                    },
                };
                let alias = column.alias.clone().map(sql::helpers::make_column_alias);
                (expression, alias)
            })
            .collect(),
    )
}

fn translate_aggregation(aggregation: model::Aggregation) -> sql::ast::Function {
    match aggregation {
        model::Aggregation::Sum => sql::ast::Function::Sum,
        model::Aggregation::Count => sql::ast::Function::Count,
        model::Aggregation::Avg => sql::ast::Function::Avg,
        model::Aggregation::Max => sql::ast::Function::Max,
        model::Aggregation::Min => sql::ast::Function::Min,
    }
}
