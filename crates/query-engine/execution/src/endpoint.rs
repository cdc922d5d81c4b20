//! The execution service, and how we talk to it over HTTP.

use query_engine_model::model::Record;
use serde::{Deserialize, Serialize};

use crate::error::ExecutionError;

/// The body of an execution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub sql: String,
    pub connection_id: String,
}

/// The body of an execution response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Record>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResponse {
    pub fn rows(rows: Vec<Record>) -> Self {
        ExecutionResponse {
            success: true,
            rows: Some(rows),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ExecutionResponse {
            success: false,
            rows: None,
            error: Some(message.into()),
        }
    }
}

/// Something that runs SQL against a connection.
#[async_trait::async_trait]
pub trait ExecutionEndpoint: Send + Sync {
    /// Submit a single request. Implementations must not retry.
    async fn submit(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ExecutionError>;
}

/// The execution service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: url::Url,
    api_key: Option<String>,
}

impl HttpEndpoint {
    pub fn new(url: url::Url, api_key: Option<String>) -> Self {
        HttpEndpoint {
            client: reqwest::Client::new(),
            url,
            api_key,
        }
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl ExecutionEndpoint for HttpEndpoint {
    async fn submit(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ExecutionError> {
        let mut builder = self.client.post(self.url.clone()).json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ExecutionError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ExecutionError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(match upstream_message(&body) {
                Some(message) => ExecutionError::Rejected { message },
                None => ExecutionError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        serde_json::from_str(&body).map_err(|err| ExecutionError::MalformedResponse(err.to_string()))
    }
}

/// Error bodies carry their message in `error` or `message`.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|field| value.get(field)?.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
