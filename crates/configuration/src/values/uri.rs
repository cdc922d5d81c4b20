use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

/// The URL of the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct EndpointUri(pub Secret);

impl EndpointUri {
    /// Whether the endpoint was written inline as an empty string.
    pub fn is_empty(&self) -> bool {
        matches!(&self.0, Secret::Plain(value) if value.trim().is_empty())
    }
}

impl From<String> for EndpointUri {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for EndpointUri {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// The bearer token sent along with every execution request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ApiKey(pub Secret);

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
