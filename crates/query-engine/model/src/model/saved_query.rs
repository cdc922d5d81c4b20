//! A saved query bundles everything needed to reopen the builder where it was left.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::query::QueryModel;
use super::visualization::VisualizationConfig;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SavedQueryId(pub String);

impl std::fmt::Display for SavedQueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let SavedQueryId(id) = self;
        write!(f, "{id}")
    }
}

impl From<&str> for SavedQueryId {
    fn from(value: &str) -> Self {
        SavedQueryId(value.to_string())
    }
}

/// A persisted bundle of query model, SQL text, visualization and connection.
///
/// `sql_text` is either the compilation of `query_model` or SQL the user wrote by
/// hand. Which one it is gets worked out again on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuery {
    /// `None` until the gateway has stored the query for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SavedQueryId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub query_model: QueryModel,
    pub sql_text: String,
    pub visualization: VisualizationConfig,
    pub connection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_executed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub execution_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

impl SavedQuery {
    /// Record a successful execution.
    pub fn record_execution(&mut self, at: DateTime<Utc>) {
        self.execution_count += 1;
        self.last_executed = Some(at);
    }
}
