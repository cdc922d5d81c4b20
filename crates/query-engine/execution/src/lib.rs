//! Query execution through an external execution service.
//!
//! The service owns the data connections. We hand it SQL text and a connection id and
//! get rows back, or an error we pass on to the user as is.

pub mod endpoint;
pub mod error;
pub mod executor;
pub mod metrics;

pub use endpoint::{ExecutionEndpoint, ExecutionRequest, ExecutionResponse, HttpEndpoint};
pub use error::{Error, ExecutionError, ValidationError};
pub use executor::{QueryExecutor, DEFAULT_TIMEOUT};
