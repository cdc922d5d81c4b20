//! Handle grouping and ordering.

use query_engine_model::model;
use query_engine_sql::sql;

/// Convert the group by columns to a SQL GROUP BY clause.
pub(crate) fn translate_group_by(group_by: &[String]) -> sql::ast::GroupBy {
    sql::ast::GroupBy {
        elements: group_by
            .iter()
            .map(|column| sql::helpers::make_unqualified_column(column.clone()))
            .collect(),
    }
}

/// Convert the order by entries to a SQL ORDER BY clause.
pub(crate) fn translate_order_by(order_by: &[model::OrderBy]) -> sql::ast::OrderBy {
    sql::ast::OrderBy {
        elements: order_by
            .iter()
            .map(|order_by| sql::ast::OrderByElement {
                target: sql::helpers::make_unqualified_column(order_by.column.clone()),
                direction: match order_by.direction {
                    model::OrderDirection::Asc => sql::ast::OrderByDirection::Asc,
                    model::OrderDirection::Desc => sql::ast::OrderByDirection::Desc,
                },
            })
            .collect(),
    }
}
