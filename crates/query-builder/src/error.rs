//! Errors for builder sessions.

use query_engine_execution as execution;
use query_engine_model::model::ModelErrors;
use query_engine_shaping::ExportError;
use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidModel(#[from] ModelErrors),
    #[error("no connection selected")]
    NoConnection,
    #[error(transparent)]
    Execution(#[from] execution::Error),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("there are no results to export")]
    NothingToExport,
}
