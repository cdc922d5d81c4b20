//! Structural checks on a query model.
//!
//! None of these look at a real schema: they only catch models that cannot produce a
//! meaningful statement (blank names, no tables), plus a few warnings about models that
//! compile fine but probably do not mean what the user thinks.

use std::collections::BTreeSet;

use thiserror::Error;

use super::query::{FilterOperator, QueryModel};

/// A structural problem that makes a model unfit for execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("no tables selected")]
    NoTables,
    #[error("table {index} has no name")]
    BlankTable { index: usize },
    #[error("column {index} has no table")]
    BlankColumnTable { index: usize },
    #[error("column {index} has no name")]
    BlankColumn { index: usize },
    #[error("column {index} has an empty alias")]
    BlankAlias { index: usize },
    #[error("join {index} has no table")]
    BlankJoinTable { index: usize },
    #[error("join {index} has no condition")]
    BlankJoinCondition { index: usize },
    #[error("filter {index} has no column")]
    BlankFilterColumn { index: usize },
    #[error("filter {index} uses IN with an empty list")]
    EmptyInList { index: usize },
    #[error("group by entry {index} is empty")]
    BlankGroupBy { index: usize },
    #[error("order by entry {index} has no column")]
    BlankOrderBy { index: usize },
}

/// Every structural problem found in a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid query: {}", render(.0))]
pub struct ModelErrors(pub Vec<ModelError>);

fn render(errors: &[ModelError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Something that compiles but is likely a mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelWarning {
    /// Only the first table is placed in the FROM clause. Any other table must be
    /// named by a join to be part of the statement.
    #[error("table '{table}' is selected but never joined, it will not be queried")]
    UnreachableTable { table: String },
    #[error("column '{column}' is neither aggregated nor grouped")]
    UngroupedColumn { column: String },
    #[error("the first filter's logic is ignored")]
    IgnoredLogic,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl QueryModel {
    /// Check the model's structure, reporting every problem rather than the first.
    pub fn validate(&self) -> Result<(), ModelErrors> {
        let mut errors = vec![];

        if self.tables.is_empty() {
            errors.push(ModelError::NoTables);
        }
        for (index, table) in self.tables.iter().enumerate() {
            if is_blank(table) {
                errors.push(ModelError::BlankTable { index });
            }
        }

        for (index, column) in self.columns.iter().enumerate() {
            if is_blank(&column.table) {
                errors.push(ModelError::BlankColumnTable { index });
            }
            if is_blank(&column.column) {
                errors.push(ModelError::BlankColumn { index });
            }
            if column.alias.as_deref().is_some_and(is_blank) {
                errors.push(ModelError::BlankAlias { index });
            }
        }

        for (index, join) in self.joins.iter().enumerate() {
            if is_blank(&join.table) {
                errors.push(ModelError::BlankJoinTable { index });
            }
            if is_blank(join.condition.as_str()) {
                errors.push(ModelError::BlankJoinCondition { index });
            }
        }

        for (index, filter) in self.filters.iter().enumerate() {
            if is_blank(&filter.column) {
                errors.push(ModelError::BlankFilterColumn { index });
            }
            if filter.operator == FilterOperator::In && is_blank(filter.value.as_str()) {
                errors.push(ModelError::EmptyInList { index });
            }
        }

        for (index, column) in self.group_by.iter().enumerate() {
            if is_blank(column) {
                errors.push(ModelError::BlankGroupBy { index });
            }
        }

        for (index, order_by) in self.order_by.iter().enumerate() {
            if is_blank(&order_by.column) {
                errors.push(ModelError::BlankOrderBy { index });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ModelErrors(errors))
        }
    }

    /// Non-fatal issues worth showing to the user.
    pub fn warnings(&self) -> Vec<ModelWarning> {
        let mut warnings = vec![];

        let joined: BTreeSet<&str> = self.joins.iter().map(|join| join.table.as_str()).collect();
        for table in self.tables.iter().skip(1) {
            if !joined.contains(table.as_str()) {
                warnings.push(ModelWarning::UnreachableTable {
                    table: table.clone(),
                });
            }
        }

        let aggregating = self.columns.iter().any(|c| c.aggregation.is_some());
        if aggregating && !self.group_by.is_empty() {
            for column in self.columns.iter().filter(|c| c.aggregation.is_none()) {
                let qualified = format!("{}.{}", column.table, column.column);
                let grouped = self.group_by.iter().any(|g| {
                    g == &qualified || g == &column.column || column.alias.as_ref() == Some(g)
                });
                if !grouped {
                    warnings.push(ModelWarning::UngroupedColumn { column: qualified });
                }
            }
        }

        if self.filters.first().is_some_and(|f| f.logic.is_some()) {
            warnings.push(ModelWarning::IgnoredLogic);
        }

        warnings
    }
}
