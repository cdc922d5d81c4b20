//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// An empty `LIMIT` clause.
pub fn empty_limit() -> Limit {
    Limit { limit: None }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::True)
}

// Names //

pub fn make_table_name(name: String) -> TableName {
    TableName(name)
}

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

/// A `table.column` reference.
pub fn make_column(table: String, name: String) -> Expression {
    Expression::ColumnReference(ColumnReference::TableColumn {
        table: TableName(table),
        name: ColumnName(name),
    })
}

/// A column reference written by the user, used verbatim.
pub fn make_unqualified_column(name: String) -> Expression {
    Expression::ColumnReference(ColumnReference::Unqualified(ColumnName(name)))
}

// Expressions //

/// `left <operator> right`
pub fn compare(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}

/// Chain conditions left to right. Returns the empty `WHERE` expression when there
/// are no conditions.
pub fn chain(conditions: Vec<(LogicalOperator, Expression)>) -> Expression {
    let mut conditions = conditions.into_iter();
    match conditions.next() {
        None => empty_where(),
        Some((_, first)) => {
            let rest: Vec<(LogicalOperator, Expression)> = conditions.collect();
            if rest.is_empty() {
                first
            } else {
                Expression::Chain {
                    first: Box::new(first),
                    rest,
                }
            }
        }
    }
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: SelectList, from: From) -> Select {
    Select {
        select_list,
        from: Some(from),
        joins: vec![],
        where_: Where(empty_where()),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// `SELECT * FROM <table>`
pub fn star_select(table: TableName) -> Select {
    simple_select(SelectList::SelectStar, From { table })
}
