//! Type definitions of a SQL AST representation.
//!
//! The AST only covers what the visual builder can express. Names are emitted exactly as
//! the user typed them and literal values are never escaped, see [`Value::UnsafeString`].

/// A SELECT statement
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: Option<From>,
    pub joins: Vec<Join>,
    pub where_: Where,
    pub group_by: GroupBy,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<(Expression, Option<ColumnAlias>)>),
    SelectStar,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub struct From {
    pub table: TableName,
}

/// A JOIN clause
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableName,
    pub on: Expression,
}

/// The flavour of a JOIN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// A GROUP BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub elements: Vec<Expression>,
}

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// A LIMIT clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u32>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Conditions joined left to right by AND/OR, without any grouping.
    /// SQL's own precedence decides how the result is read.
    Chain {
        first: Box<Expression>,
        rest: Vec<(LogicalOperator, Expression)>,
    },
    /// A binary operation on two scalar expression
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// A function call, aggregates included
    FunctionCall {
        function: Function,
        args: Vec<Expression>,
    },
    /// An expression wrapped in parentheses
    Nested(Box<Expression>),
    /// A column reference
    ColumnReference(ColumnReference),
    /// An irreducible value
    Value(Value),
    /// Raw SQL written by a user which is opaque to us
    RawSql(RawSql),
}

/// The connective between two chained conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A binary comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
    In,
}

/// A scalar function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Function {
    Sum,
    Count,
    Avg,
    Max,
    Min,
}

/// Value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `true`, what an empty `WHERE` holds.
    True,
    /// A string literal, single quoted, with its contents emitted as is.
    UnsafeString(String),
}

/// Raw SQL text, emitted verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql(pub String);

/// A database table name, possibly schema qualified by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A database table's column name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// A reference to a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnReference {
    /// a column qualified by its table, `table.column`
    TableColumn { table: TableName, name: ColumnName },
    /// a column exactly as the user wrote it, qualified or not
    Unqualified(ColumnName),
}

/// aliases that we give to columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnAlias {
    pub name: String,
}
