//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::SQL;

/// Render a whole SELECT statement.
pub fn select_to_sql(select: &Select) -> SQL {
    let mut sql = SQL::new();
    select.to_sql(&mut sql);
    sql
}

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_clause("SELECT ");

        self.select_list.to_sql(sql);

        if let Some(from) = &self.from {
            from.to_sql(sql);
        }

        for join in &self.joins {
            join.to_sql(sql);
        }

        self.where_.to_sql(sql);

        self.group_by.to_sql(sql);

        self.order_by.to_sql(sql);

        self.limit.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                for (index, (expr, alias)) in select_list.iter().enumerate() {
                    expr.to_sql(sql);
                    if let Some(alias) = alias {
                        sql.append_syntax(" AS ");
                        alias.to_sql(sql);
                    }
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_clause("FROM ");
        self.table.to_sql(sql);
    }
}

impl Join {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self.kind {
            JoinKind::Inner => sql.append_clause("INNER JOIN "),
            JoinKind::Left => sql.append_clause("LEFT JOIN "),
            JoinKind::Right => sql.append_clause("RIGHT JOIN "),
            JoinKind::Full => sql.append_clause("FULL JOIN "),
        }
        self.table.to_sql(sql);
        sql.append_syntax(" ON ");
        self.on.to_sql(sql);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_clause("WHERE ");
            expression.to_sql(sql);
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_clause("GROUP BY ");
            for (index, element) in self.elements.iter().enumerate() {
                element.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_clause("ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(limit) = self.limit {
            sql.append_clause("LIMIT ");
            sql.append_syntax(&limit.to_string());
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::Chain { first, rest } => {
                first.to_sql(sql);
                for (operator, expression) in rest {
                    operator.to_sql(sql);
                    expression.to_sql(sql);
                }
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::FunctionCall { function, args } => {
                function.to_sql(sql);
                sql.append_syntax("(");
                for (index, arg) in args.iter().enumerate() {
                    arg.to_sql(sql);
                    if index < (args.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
                sql.append_syntax(")");
            }
            Expression::Nested(expression) => {
                sql.append_syntax("(");
                expression.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::ColumnReference(column) => column.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::RawSql(RawSql(text)) => sql.append_syntax(text),
        }
    }
}

impl LogicalOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            LogicalOperator::And => sql.append_syntax(" AND "),
            LogicalOperator::Or => sql.append_syntax(" OR "),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::NotEquals => sql.append_syntax(" != "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::Like => sql.append_syntax(" LIKE "),
            BinaryOperator::In => sql.append_syntax(" IN "),
        }
    }
}

impl Function {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Function::Sum => sql.append_syntax("SUM"),
            Function::Count => sql.append_syntax("COUNT"),
            Function::Avg => sql.append_syntax("AVG"),
            Function::Max => sql.append_syntax("MAX"),
            Function::Min => sql.append_syntax("MIN"),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::True => sql.append_syntax("true"),
            Value::UnsafeString(s) => sql.append_unsafe_string(s),
        }
    }
}

// names
impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let TableName(name) = self;
        sql.append_identifier(name);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            ColumnReference::TableColumn { table, name } => {
                table.to_sql(sql);
                sql.append_syntax(".");
                name.to_sql(sql);
            }
            ColumnReference::Unqualified(name) => name.to_sql(sql),
        }
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_identifier(name);
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}
