//! Translate a query model to a SELECT statement.

mod fields;
mod filtering;
mod joins;
mod sorting;
mod values;

use query_engine_model::model;
use query_engine_sql::sql;

/// Translate a query model into a SQL AST.
///
/// Returns `None` when the model has no tables, as there is nothing to select from.
pub fn translate(query: &model::QueryModel) -> Option<sql::ast::Select> {
    let anchor = query.anchor_table()?;

    let select_list = fields::translate_fields(&query.columns);
    let from = sql::ast::From {
        table: sql::helpers::make_table_name(anchor.to_string()),
    };

    let mut select = sql::helpers::simple_select(select_list, from);
    select.joins = joins::translate_joins(&query.joins);
    select.where_ = sql::ast::Where(filtering::translate_filters(&query.filters));
    select.group_by = sorting::translate_group_by(&query.group_by);
    select.order_by = sorting::translate_order_by(&query.order_by);
    select.limit = sql::ast::Limit {
        limit: query.limit.map(std::num::NonZeroU32::get),
    };

    tracing::debug!("Translated query: {:?}", select);

    Some(select)
}

/// Compile a query model into SQL text.
///
/// The result is a pure function of the model. A model without tables compiles to the
/// empty string.
pub fn compile(query: &model::QueryModel) -> String {
    match translate(query) {
        None => String::new(),
        Some(select) => sql::convert::select_to_sql(&select).into(),
    }
}
