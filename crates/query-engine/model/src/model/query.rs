//! The query model assembled by the visual builder.

use std::num::NonZeroU32;

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A query assembled by the visual builder.
///
/// The first entry of `tables` is the anchor of the FROM clause. Further tables only
/// appear in the compiled SQL when a join names them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryModel {
    #[serde(default)]
    pub tables: Vec<String>,
    /// An empty projection selects every column.
    #[serde(default)]
    pub columns: Vec<SelectedColumn>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub order_by: Vec<OrderBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<NonZeroU32>,
}

impl QueryModel {
    pub fn empty() -> Self {
        QueryModel::default()
    }

    /// The table the FROM clause is anchored on, if any.
    pub fn anchor_table(&self) -> Option<&str> {
        self.tables.first().map(String::as_str)
    }
}

/// A projected column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedColumn {
    pub table: String,
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
}

impl SelectedColumn {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        SelectedColumn {
            table: table.into(),
            column: column.into(),
            alias: None,
            aggregation: None,
        }
    }

    #[must_use]
    pub fn aggregated(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    #[must_use]
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Aggregate functions a projected column may be wrapped in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregation {
    Sum,
    Count,
    Avg,
    Max,
    Min,
}

/// A join against another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Join {
    #[serde(rename = "type")]
    pub join_type: JoinType,
    pub table: String,
    /// Spliced into the ON clause as written.
    pub condition: UnsafeLiteral,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// A single condition of the WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub column: String,
    pub operator: FilterOperator,
    pub value: UnsafeLiteral,
    /// How this filter connects to the previous one. Ignored on the first filter,
    /// and `AND` when unset on the others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<Logic>,
}

impl Filter {
    pub fn new(column: impl Into<String>, operator: FilterOperator, value: UnsafeLiteral) -> Self {
        Filter {
            column: column.into(),
            operator,
            value,
            logic: None,
        }
    }

    #[must_use]
    pub fn with_logic(mut self, logic: Logic) -> Self {
        self.logic = Some(logic);
        self
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqualTo,
    #[serde(rename = "<=")]
    LessThanOrEqualTo,
    #[serde(rename = "LIKE")]
    Like,
    /// The value is expected to be a pre-formatted, comma separated list.
    #[serde(rename = "IN")]
    In,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Sequence,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Logic {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub column: String,
    pub direction: OrderDirection,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Text that ends up in the compiled SQL exactly as written: no quoting of its
/// contents, no escaping, no parameterisation.
///
/// Join conditions and filter values are both of this type so that code building a
/// query has to say so explicitly. On the wire it is a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UnsafeLiteral(String);

impl UnsafeLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        UnsafeLiteral(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnsafeLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
