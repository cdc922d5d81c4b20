use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{self, Environment, Variable};

/// A value given either inline or by naming the environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    FromEnvironment { variable: String },
}

impl Secret {
    pub fn from_environment(variable: impl Into<String>) -> Self {
        Secret::FromEnvironment {
            variable: variable.into(),
        }
    }

    /// Produce the value, reading it from `environment` if necessary.
    pub fn resolve(&self, environment: impl Environment) -> Result<String, environment::Error> {
        match self {
            Secret::Plain(value) => Ok(value.clone()),
            Secret::FromEnvironment { variable } => {
                environment.read(&Variable::new(variable.as_str()))
            }
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
