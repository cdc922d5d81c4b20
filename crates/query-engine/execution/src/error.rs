//! Errors for query execution.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Requests we refuse before contacting the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("there is no SQL to execute")]
    EmptySql,
    #[error("no connection selected")]
    MissingConnection,
}

/// Failures reported by, or while talking to, the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The service ran the query and reported a failure. The message is the service's own.
    #[error("{message}")]
    Rejected { message: String },
    #[error("execution service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not reach the execution service: {0}")]
    Transport(String),
    #[error("query did not complete within {0:?}")]
    Timeout(Duration),
    #[error("query was cancelled")]
    Cancelled,
    #[error("could not read the execution service's response: {0}")]
    MalformedResponse(String),
}
