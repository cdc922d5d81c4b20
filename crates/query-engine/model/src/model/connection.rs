//! Data connections, as described by the connection management service.

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A data connection. Only `id` and `connection_type` matter to the query builder; the
/// rest is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    #[serde(default)]
    pub config: serde_json::Value,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Database,
    Webhook,
    Api,
    File,
}

impl ConnectionType {
    /// Whether the connection is backed by a SQL engine. Compiled SQL is still sent to
    /// the others, the execution service decides what it does with it.
    pub fn speaks_sql(self) -> bool {
        matches!(self, ConnectionType::Database)
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ConnectionType::Database => "database",
            ConnectionType::Webhook => "webhook",
            ConnectionType::Api => "api",
            ConnectionType::File => "file",
        };
        write!(f, "{name}")
    }
}
