//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can be thrown when parsing a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("empty execution endpoint in {file_path}")]
    EmptyEndpointUri { file_path: PathBuf },

    // This is a hack to work around the fact that we only have a string error at hand.
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when resolving a parsed configuration into a runtime one.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("environment variable {variable} could not be read: {message}")]
    MissingEnvironmentVariable { variable: String, message: String },
    #[error("invalid execution endpoint '{uri}': {message}")]
    InvalidEndpointUri { uri: String, message: String },
    #[error("the execution timeout must be at least one second")]
    InvalidTimeout,
}

/// The errors that can be thrown when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
