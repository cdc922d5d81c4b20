//! Execute SQL text against a connection.

use std::time::Duration;

use query_engine_model::model::Record;
use tokio_util::sync::CancellationToken;
use tracing::{info_span, Instrument};

use crate::endpoint::{ExecutionEndpoint, ExecutionRequest, ExecutionResponse};
use crate::error::{Error, ExecutionError, ValidationError};
use crate::metrics;

/// How long we wait for the execution service when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends SQL to an execution endpoint, one request per call, never retrying.
#[derive(Debug, Clone)]
pub struct QueryExecutor<E> {
    endpoint: E,
    timeout: Duration,
    metrics: metrics::Metrics,
}

impl<E: ExecutionEndpoint> QueryExecutor<E> {
    pub fn new(endpoint: E, timeout: Duration, metrics: metrics::Metrics) -> Self {
        QueryExecutor {
            endpoint,
            timeout,
            metrics,
        }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute `sql` against the connection `connection_id`.
    ///
    /// Blank SQL or a blank connection id are refused without contacting the service.
    pub async fn execute(
        &self,
        sql: &str,
        connection_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<Vec<Record>, Error> {
        let request = validate(sql, connection_id)?;

        self.metrics.execution_total.inc();
        let timer = self.metrics.execution_duration_seconds.start_timer();

        let result = self
            .submit(&request, cancellation)
            .instrument(info_span!(
                "Execute query",
                connection_id = %request.connection_id,
            ))
            .await;

        timer.observe_duration();

        match result {
            Ok(rows) => {
                tracing::info!(rows = rows.len(), "Query executed");
                Ok(rows)
            }
            Err(err) => {
                self.metrics.execution_failures_total.inc();
                if matches!(err, ExecutionError::Timeout(_)) {
                    self.metrics.execution_timeouts_total.inc();
                }
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "query_builder",
                    event.name = "Execution error",
                    name = "Execution error",
                    body = %err,
                    error = true,
                );
                Err(err.into())
            }
        }
    }

    async fn submit(
        &self,
        request: &ExecutionRequest,
        cancellation: &CancellationToken,
    ) -> Result<Vec<Record>, ExecutionError> {
        tracing::debug!(sql = %request.sql, "Submitting query");
        tokio::select! {
            biased;
            () = cancellation.cancelled() => Err(ExecutionError::Cancelled),
            outcome = tokio::time::timeout(self.timeout, self.endpoint.submit(request)) => {
                match outcome {
                    Err(_elapsed) => Err(ExecutionError::Timeout(self.timeout)),
                    Ok(response) => response.and_then(into_rows),
                }
            }
        }
    }
}

fn validate(sql: &str, connection_id: &str) -> Result<ExecutionRequest, ValidationError> {
    if sql.trim().is_empty() {
        return Err(ValidationError::EmptySql);
    }
    if connection_id.trim().is_empty() {
        return Err(ValidationError::MissingConnection);
    }
    Ok(ExecutionRequest {
        sql: sql.to_string(),
        connection_id: connection_id.to_string(),
    })
}

/// A failed execution is never an empty result set.
fn into_rows(response: ExecutionResponse) -> Result<Vec<Record>, ExecutionError> {
    if response.success {
        Ok(response.rows.unwrap_or_default())
    } else {
        Err(ExecutionError::Rejected {
            message: response
                .error
                .unwrap_or_else(|| "query execution failed".to_string()),
        })
    }
}
