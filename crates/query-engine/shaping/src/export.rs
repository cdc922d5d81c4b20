//! Exporting result rows to files. Producing the files is up to the collaborator.

use enum_iterator::Sequence;
use query_engine_model::model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shape::tabulate;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "PDF"),
            ExportFormat::Excel => write!(f, "Excel"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("{format} export failed: {message}")]
    Failed {
        format: ExportFormat,
        message: String,
    },
}

/// Produces export files from result rows.
#[async_trait::async_trait]
pub trait Exporter: Send + Sync {
    /// `columns` lists the columns to print, in order.
    async fn export_pdf(
        &self,
        rows: &[model::Record],
        title: &str,
        columns: &[String],
    ) -> Result<(), ExportError>;

    async fn export_excel(&self, rows: &[model::Record], title: &str) -> Result<(), ExportError>;
}

/// Hand `rows` to `exporter` in the requested format. PDF columns are the table headers.
pub async fn export(
    exporter: &dyn Exporter,
    format: ExportFormat,
    rows: &[model::Record],
    title: &str,
) -> Result<(), ExportError> {
    tracing::info!(rows = rows.len(), %format, "Exporting result");
    match format {
        ExportFormat::Pdf => {
            let columns = tabulate(rows).map(|table| table.headers).unwrap_or_default();
            exporter.export_pdf(rows, title, &columns).await
        }
        ExportFormat::Excel => exporter.export_excel(rows, title).await,
    }
}
