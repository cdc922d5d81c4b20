use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for submitting queries to the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSettings {
    /// How long to wait for the execution service to answer (seconds)
    #[serde(default = "timeout_default")]
    pub timeout: u64,
}

impl ExecutionSettings {
    pub fn is_default(&self) -> bool {
        *self == ExecutionSettings::default()
    }
}

impl Default for ExecutionSettings {
    fn default() -> ExecutionSettings {
        ExecutionSettings { timeout: 30 }
    }
}

// for serde default //
fn timeout_default() -> u64 {
    ExecutionSettings::default().timeout
}
