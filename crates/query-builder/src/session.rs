//! A builder session: one query model, the SQL it compiles to, and the last results.
//!
//! The session is in one of two modes. In derived mode the SQL text is recompiled from
//! the model after every change. Once the user edits the SQL by hand the session is in
//! manual mode, and the edited text is what gets executed until the session is reset.

use std::num::NonZeroU32;

use query_engine_execution::{ExecutionEndpoint, QueryExecutor};
use query_engine_model::model::{
    Connection, ConnectionType, Filter, Join, OrderBy, QueryModel, Record, SavedQuery,
    SavedQueryId, SelectedColumn, VisualizationConfig,
};
use query_engine_shaping::{self as shaping, ExportFormat, Exporter, Presentation};
use query_engine_translation::translation;
use tokio_util::sync::CancellationToken;
use tracing::{info_span, Instrument};

use crate::error::SessionError;
use crate::gateway::SavedQueryGateway;
use crate::notification::{Notification, Notifier};

/// The title results get until the user picks one.
pub const DEFAULT_TITLE: &str = "Query Results";

pub struct Session<E, G, N> {
    executor: QueryExecutor<E>,
    gateway: G,
    notifier: N,

    model: QueryModel,
    sql_text: String,
    manual_override: bool,
    visualization: VisualizationConfig,
    connection_id: Option<String>,
    connection_type: Option<ConnectionType>,
    saved_query: Option<SavedQuery>,
    rows: Vec<Record>,
    presentation: Option<Presentation>,
}

impl<E, G, N> Session<E, G, N>
where
    E: ExecutionEndpoint,
    G: SavedQueryGateway,
    N: Notifier,
{
    pub fn new(executor: QueryExecutor<E>, gateway: G, notifier: N) -> Self {
        Session {
            executor,
            gateway,
            notifier,
            model: QueryModel::empty(),
            sql_text: String::new(),
            manual_override: false,
            visualization: VisualizationConfig::table(DEFAULT_TITLE),
            connection_id: None,
            connection_type: None,
            saved_query: None,
            rows: vec![],
            presentation: None,
        }
    }

    pub fn model(&self) -> &QueryModel {
        &self.model
    }

    /// The SQL that `execute` runs.
    pub fn sql_text(&self) -> &str {
        &self.sql_text
    }

    pub fn is_manual(&self) -> bool {
        self.manual_override
    }

    pub fn visualization(&self) -> &VisualizationConfig {
        &self.visualization
    }

    pub fn connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    /// The saved query this session was saved as or loaded from.
    pub fn saved_query(&self) -> Option<&SavedQuery> {
        self.saved_query.as_ref()
    }

    /// Rows of the last successful execution.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    /// Change the visualization. Existing results are shaped again.
    pub fn set_visualization(&mut self, visualization: VisualizationConfig) {
        self.visualization = visualization;
        if self.presentation.is_some() {
            self.presentation = Some(shaping::shape(&self.rows, &self.visualization));
        }
    }

    pub fn bind_connection(&mut self, connection: &Connection) {
        if !connection.connection_type.speaks_sql() {
            tracing::warn!(
                connection_id = %connection.id,
                connection_type = %connection.connection_type,
                "Connection is not a database, the execution service may not understand SQL"
            );
        }
        self.connection_id = Some(connection.id.clone());
        self.connection_type = Some(connection.connection_type);
    }

    /// Apply `change` to the model, then derive the SQL again.
    pub fn update_model(&mut self, change: impl FnOnce(&mut QueryModel)) {
        change(&mut self.model);
        self.derive();
    }

    pub fn set_tables(&mut self, tables: Vec<String>) {
        self.update_model(|model| model.tables = tables);
    }

    pub fn add_table(&mut self, table: impl Into<String>) {
        let table = table.into();
        self.update_model(|model| model.tables.push(table));
    }

    pub fn add_column(&mut self, column: SelectedColumn) {
        self.update_model(|model| model.columns.push(column));
    }

    pub fn remove_column(&mut self, index: usize) {
        self.update_model(|model| {
            if index < model.columns.len() {
                model.columns.remove(index);
            }
        });
    }

    pub fn add_join(&mut self, join: Join) {
        self.update_model(|model| model.joins.push(join));
    }

    pub fn add_filter(&mut self, filter: Filter) {
        self.update_model(|model| model.filters.push(filter));
    }

    pub fn remove_filter(&mut self, index: usize) {
        self.update_model(|model| {
            if index < model.filters.len() {
                model.filters.remove(index);
            }
        });
    }

    pub fn set_group_by(&mut self, columns: Vec<String>) {
        self.update_model(|model| model.group_by = columns);
    }

    pub fn add_order_by(&mut self, order_by: OrderBy) {
        self.update_model(|model| model.order_by.push(order_by));
    }

    pub fn set_limit(&mut self, limit: Option<NonZeroU32>) {
        self.update_model(|model| model.limit = limit);
    }

    /// Replace the SQL text by hand. The model no longer drives it.
    pub fn edit_sql(&mut self, sql: impl Into<String>) {
        self.sql_text = sql.into();
        self.manual_override = true;
    }

    /// Drop manual edits and compile the model again.
    pub fn reset_to_derived(&mut self) {
        self.manual_override = false;
        self.derive();
    }

    fn derive(&mut self) {
        if self.manual_override {
            return;
        }
        for warning in self.model.warnings() {
            tracing::warn!(%warning, "Query model warning");
        }
        self.sql_text = translation::compile(&self.model);
    }

    /// Execute the current SQL against the bound connection.
    ///
    /// On failure the previous results stay in place and the error is reported to the
    /// notifier as well as returned.
    pub async fn execute(
        &mut self,
        cancellation: &CancellationToken,
    ) -> Result<&Presentation, SessionError> {
        let rows = match self.run(cancellation).await {
            Ok(rows) => rows,
            Err(err) => {
                self.notifier
                    .notify(Notification::error("Query failed", err.to_string()));
                return Err(err);
            }
        };

        self.notifier.notify(Notification::info(
            "Query executed",
            format!("{} rows found", rows.len()),
        ));
        self.record_execution().await;

        let presentation = shaping::shape(&rows, &self.visualization);
        self.rows = rows;
        Ok(self.presentation.insert(presentation))
    }

    async fn run(&self, cancellation: &CancellationToken) -> Result<Vec<Record>, SessionError> {
        if !self.manual_override {
            self.model.validate()?;
        }
        let connection_id = self
            .connection_id
            .as_deref()
            .ok_or(SessionError::NoConnection)?;
        if let Some(connection_type) = self.connection_type.filter(|ty| !ty.speaks_sql()) {
            self.notifier.notify(Notification::warning(
                "Not a database",
                format!("Sending SQL to a {connection_type} connection"),
            ));
        }

        let rows = self
            .executor
            .execute(&self.sql_text, connection_id, cancellation)
            .instrument(info_span!("Session execute", manual = self.manual_override))
            .await?;
        Ok(rows)
    }

    /// Update the bound saved query's statistics. A failure to store them does not fail
    /// the execution.
    async fn record_execution(&mut self) {
        let Some(saved_query) = self.saved_query.as_mut() else {
            return;
        };
        saved_query.record_execution(chrono::Utc::now());
        if let Err(err) = self.gateway.save(saved_query.clone()).await {
            self.notifier.notify(Notification::warning(
                "Statistics not saved",
                err.to_string(),
            ));
        }
    }

    /// Save the current query, model, SQL and visualization together, and bind the
    /// session to the result. Saving a session that is already bound updates the
    /// existing saved query.
    pub async fn save(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<SavedQueryId, SessionError> {
        let connection_id = self
            .connection_id
            .clone()
            .ok_or(SessionError::NoConnection)?;
        let previous = self.saved_query.as_ref();

        let mut saved_query = SavedQuery {
            id: previous.and_then(|saved| saved.id.clone()),
            name: name.into(),
            description: description.into(),
            query_model: self.model.clone(),
            sql_text: self.sql_text.clone(),
            visualization: self.visualization.clone(),
            connection_id,
            last_executed: previous.and_then(|saved| saved.last_executed),
            execution_count: previous.map_or(0, |saved| saved.execution_count),
            tags,
            is_public: previous.is_some_and(|saved| saved.is_public),
        };

        let id = self.gateway.save(saved_query.clone()).await?;
        saved_query.id = Some(id.clone());
        tracing::info!(%id, name = %saved_query.name, "Query saved");
        self.notifier.notify(Notification::info(
            "Query saved",
            format!("'{}' was saved", saved_query.name),
        ));
        self.saved_query = Some(saved_query);
        Ok(id)
    }

    /// Reopen a saved query. The session is in manual mode when the stored SQL is not
    /// what the stored model compiles to.
    pub async fn load(&mut self, id: &SavedQueryId) -> Result<(), SessionError> {
        let saved_query = self.gateway.load(id).await?;

        let derived = translation::compile(&saved_query.query_model);
        self.manual_override = derived != saved_query.sql_text;
        self.model = saved_query.query_model.clone();
        self.sql_text = saved_query.sql_text.clone();
        self.visualization = saved_query.visualization.clone();
        if self.connection_id.as_deref() != Some(saved_query.connection_id.as_str()) {
            self.connection_id = Some(saved_query.connection_id.clone());
            self.connection_type = None;
        }
        self.rows.clear();
        self.presentation = None;

        tracing::info!(%id, manual = self.manual_override, "Query loaded");
        self.saved_query = Some(saved_query);
        Ok(())
    }

    /// Hand the last results to `exporter`.
    pub async fn export(
        &self,
        format: ExportFormat,
        exporter: &dyn Exporter,
    ) -> Result<(), SessionError> {
        if self.rows.is_empty() {
            return Err(SessionError::NothingToExport);
        }
        if let Err(err) =
            shaping::export(exporter, format, &self.rows, &self.visualization.title).await
        {
            self.notifier
                .notify(Notification::error("Export failed", err.to_string()));
            return Err(err.into());
        }
        Ok(())
    }
}
