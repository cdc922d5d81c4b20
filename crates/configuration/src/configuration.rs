//! Configuration for the query builder.

use std::time::Duration;

/// The 'Configuration' type collects all the information necessary to execute queries at
/// runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', once every secret has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Where compiled SQL is sent for execution.
    pub execution_endpoint: url::Url,
    pub api_key: Option<String>,
    pub execution_timeout: Duration,
}
