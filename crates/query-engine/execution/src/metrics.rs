//! Metrics setup and update for query execution.

use prometheus::core::{AtomicU64, GenericCounter};
use prometheus::Histogram;

/// The collection of all metrics exposed through the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub execution_total: GenericCounter<AtomicU64>,
    pub execution_failures_total: GenericCounter<AtomicU64>,
    pub execution_timeouts_total: GenericCounter<AtomicU64>,
    pub execution_duration_seconds: Histogram,
}

impl Metrics {
    /// Set up counters and a histogram used to produce Prometheus metrics.
    pub fn initialize(
        metrics_registry: &mut prometheus::Registry,
    ) -> Result<Self, prometheus::Error> {
        let execution_total = add_int_counter_metric(
            metrics_registry,
            "query_builder_execution_total",
            "Total queries submitted to the execution service.",
        )?;

        let execution_failures_total = add_int_counter_metric(
            metrics_registry,
            "query_builder_execution_failures_total",
            "Total queries that failed, including timeouts and cancellations.",
        )?;

        let execution_timeouts_total = add_int_counter_metric(
            metrics_registry,
            "query_builder_execution_timeouts_total",
            "Total queries abandoned because the execution service did not answer in time.",
        )?;

        let execution_duration_seconds = add_histogram_metric(
            metrics_registry,
            "query_builder_execution_duration_seconds",
            "Time taken by the execution service to answer, in seconds.",
        )?;

        Ok(Self {
            execution_total,
            execution_failures_total,
            execution_timeouts_total,
            execution_duration_seconds,
        })
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    register_collector(metrics_registry, int_counter)
}

/// Create a new histogram metric using the default buckets, and register it with the
/// provided Prometheus Registry
fn add_histogram_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = prometheus::Histogram::with_opts(prometheus::HistogramOpts::new(
        metric_name,
        metric_description,
    ))?;
    register_collector(metrics_registry, histogram)
}

/// Register a new collector with the registry, and returns it for later use.
fn register_collector<Collector: prometheus::core::Collector + Clone + 'static>(
    metrics_registry: &mut prometheus::Registry,
    collector: Collector,
) -> Result<Collector, prometheus::Error> {
    metrics_registry.register(Box::new(collector.clone()))?;
    Ok(collector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_are_registered_once() {
        let mut registry = prometheus::Registry::new();
        Metrics::initialize(&mut registry).unwrap();

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"query_builder_execution_duration_seconds".to_string()));
        assert!(Metrics::initialize(&mut registry).is_err());
    }
}
