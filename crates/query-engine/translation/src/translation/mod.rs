//! Translate a query model to SQL.

pub mod query;

pub use query::{compile, translate};
