//! Handle the translation of filter values.
//!
//! Values are spliced in as the user typed them. Only the surrounding syntax depends on
//! the operator.

use query_engine_model::model;
use query_engine_sql::sql;

/// Format a filter value for the right-hand side of its operator.
pub(crate) fn translate_filter_value(
    operator: model::FilterOperator,
    value: &model::UnsafeLiteral,
) -> sql::ast::Expression {
    match operator {
        // the value is a pre-formatted list
        model::FilterOperator::In => sql::ast::Expression::Nested(Box::new(
            sql::ast::Expression::RawSql(sql::ast::RawSql(value.as_str().to_string())),
        )),
        // always a substring match
        model::FilterOperator::Like => sql::ast::Expression::Value(
            sql::ast::Value::UnsafeString(format!("%{}%", value.as_str())),
        ),
        model::FilterOperator::Equals
        | model::FilterOperator::NotEquals
        | model::FilterOperator::GreaterThan
        | model::FilterOperator::LessThan
        | model::FilterOperator::GreaterThanOrEqualTo
        | model::FilterOperator::LessThanOrEqualTo => sql::ast::Expression::Value(
            sql::ast::Value::UnsafeString(value.as_str().to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(operator: model::FilterOperator, value: &str) -> String {
        let mut sql = sql::string::SQL::new();
        translate_filter_value(operator, &model::UnsafeLiteral::new(value)).to_sql(&mut sql);
        sql.sql
    }

    #[test]
    fn comparison_values_are_quoted() {
        assert_eq!(render(model::FilterOperator::GreaterThan, "18"), "'18'");
    }

    #[test]
    fn like_values_are_wrapped_in_wildcards() {
        assert_eq!(render(model::FilterOperator::Like, "smith"), "'%smith%'");
    }

    #[test]
    fn in_values_are_parenthesised_as_is() {
        assert_eq!(render(model::FilterOperator::In, "'a', 'b'"), "('a', 'b')");
    }
}
