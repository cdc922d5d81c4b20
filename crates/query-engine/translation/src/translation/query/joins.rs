//! Handle joins.

use query_engine_model::model;
use query_engine_sql::sql;

/// Translate joins in the order they were added. Conditions are used verbatim.
pub(crate) fn translate_joins(joins: &[model::Join]) -> Vec<sql::ast::Join> {
    joins
        .iter()
        .map(|join| sql::ast::Join {
            kind: match join.join_type {
                model::JoinType::Inner => sql::ast::JoinKind::Inner,
                model::JoinType::Left => sql::ast::JoinKind::Left,
                model::JoinType::Right => sql::ast::JoinKind::Right,
                model::JoinType::Full => sql::ast::JoinKind::Full,
            },
            table: sql::helpers::make_table_name(join.table.clone()),
            on: sql::ast::Expression::RawSql(sql::ast::RawSql(
                join.condition.as_str().to_string(),
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_join_type_renders_its_keyword() {
        for join_type in enum_iterator::all::<model::JoinType>() {
            let joins = translate_joins(&[model::Join {
                join_type,
                table: "customers".to_string(),
                condition: model::UnsafeLiteral::new("orders.customer_id = customers.id"),
            }]);
            let mut sql = sql::string::SQL::new();
            joins[0].to_sql(&mut sql);
            let keyword = serde_json::to_value(join_type).unwrap();
            assert_eq!(
                sql.sql,
                format!(
                    "{} JOIN customers ON orders.customer_id = customers.id",
                    keyword.as_str().unwrap()
                )
            );
        }
    }
}
