//! Transient state used by the query builder.
//!
//! This is initialized on startup.

use thiserror::Error;
use tracing::{info_span, Instrument};

use query_builder_configuration::Configuration;
use query_engine_execution::{metrics, HttpEndpoint, QueryExecutor};

/// State shared by every session of the process.
#[derive(Debug, Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
    pub executor: QueryExecutor<HttpEndpoint>,
}

/// Register metrics and set up an executor talking to the configured endpoint.
pub async fn create_state(
    configuration: &Configuration,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        Ok(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    let endpoint = HttpEndpoint::new(
        configuration.execution_endpoint.clone(),
        configuration.api_key.clone(),
    );
    tracing::info!(endpoint = %endpoint.url(), timeout = ?configuration.execution_timeout, "Execution endpoint configured");

    let executor = QueryExecutor::new(endpoint, configuration.execution_timeout, metrics.clone());

    Ok(State { metrics, executor })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
