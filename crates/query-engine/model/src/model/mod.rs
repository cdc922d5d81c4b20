//! The structured, serializable description of a query and of everything bundled with it:
//! how its results are visualized, which connection it runs against, and how it is saved.

pub mod connection;
pub mod query;
pub mod saved_query;
pub mod validation;
pub mod visualization;

// re-export without modules
pub use connection::*;
pub use query::*;
pub use saved_query::*;
pub use validation::*;
pub use visualization::*;

/// A single result row, as returned by the execution endpoint.
///
/// Keys keep the order the endpoint produced them in, which is the column order
/// we present to the user.
pub type Record = indexmap::IndexMap<String, serde_json::Value>;
