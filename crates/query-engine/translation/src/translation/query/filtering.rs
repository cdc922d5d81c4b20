//! Handle filtering.

use super::values;
use query_engine_model::model;
use query_engine_sql::sql;

/// Translate the filters to a WHERE expression.
///
/// Filters are chained strictly left to right with no grouping, each connected to the
/// previous one by its own logic keyword. The first filter's logic is ignored.
pub(crate) fn translate_filters(filters: &[model::Filter]) -> sql::ast::Expression {
    sql::helpers::chain(
        filters
            .iter()
            .map(|filter| {
                let condition = sql::helpers::compare(
                    sql::helpers::make_unqualified_column(filter.column.clone()),
                    translate_operator(filter.operator),
                    values::translate_filter_value(filter.operator, &filter.value),
                );
                (translate_logic(filter.logic.unwrap_or_default()), condition)
            })
            .collect(),
    )
}

fn translate_operator(operator: model::FilterOperator) -> sql::ast::BinaryOperator {
    match operator {
        model::FilterOperator::Equals => sql::ast::BinaryOperator::Equals,
        model::FilterOperator::NotEquals => sql::ast::BinaryOperator::NotEquals,
        model::FilterOperator::GreaterThan => sql::ast::BinaryOperator::GreaterThan,
        model::FilterOperator::LessThan => sql::ast::BinaryOperator::LessThan,
        model::FilterOperator::GreaterThanOrEqualTo => {
            sql::ast::BinaryOperator::GreaterThanOrEqualTo
        }
        model::FilterOperator::LessThanOrEqualTo => sql::ast::BinaryOperator::LessThanOrEqualTo,
        model::FilterOperator::Like => sql::ast::BinaryOperator::Like,
        model::FilterOperator::In => sql::ast::BinaryOperator::In,
    }
}

fn translate_logic(logic: model::Logic) -> sql::ast::LogicalOperator {
    match logic {
        model::Logic::And => sql::ast::LogicalOperator::And,
        model::Logic::Or => sql::ast::LogicalOperator::Or,
    }
}
