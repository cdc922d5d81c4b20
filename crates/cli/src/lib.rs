//! The query builder from the command line.
//!
//! Set up a configuration directory, compile query models to SQL, and execute them
//! through the configured execution service.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Subcommand;
use tokio::fs;
use tokio_util::sync::CancellationToken;

use query_builder::{InMemoryGateway, Session, TracingNotifier};
use query_builder_configuration::environment::Environment;
use query_builder_configuration::{self as configuration, ParsedConfiguration};
use query_engine_model::model;
use query_engine_translation::translation;

/// The various contextual bits and bobs we need to run.
pub struct Context<Env: Environment, Out: Write> {
    pub context_path: PathBuf,
    pub environment: Env,
    pub output: Out,
}

/// The command invoked by the user.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write an initial configuration to the context directory.
    Initialize {
        /// Overwrite an existing configuration.
        #[arg(long)]
        force: bool,
    },
    /// Compile a query model to SQL.
    Compile {
        /// A JSON file holding the query model. `-` reads standard input.
        model: PathBuf,
        /// Lay the SQL out for reading. The text that gets executed is never formatted.
        #[arg(long)]
        pretty: bool,
    },
    /// Execute a query model, or SQL written by hand, and print the shaped result.
    Execute {
        /// A JSON file holding the query model.
        #[arg(long, conflicts_with = "sql", required_unless_present = "sql")]
        model: Option<PathBuf>,
        /// SQL to execute as is.
        #[arg(long)]
        sql: Option<String>,
        /// The id of the connection to run against.
        #[arg(long, env = "QUERY_BUILDER_CONNECTION_ID")]
        connection: String,
        /// A JSON file holding the visualization configuration. Results are shown as a
        /// table otherwise.
        #[arg(long)]
        visualization: Option<PathBuf>,
    },
    /// Print the JSON schema of query models, or of saved queries.
    Schema {
        #[arg(long)]
        saved_query: bool,
    },
}

/// Run a command in a given context.
pub async fn run<Env: Environment, Out: Write>(
    command: Command,
    context: Context<Env, Out>,
) -> anyhow::Result<()> {
    match command {
        Command::Initialize { force } => initialize(force, context).await?,
        Command::Compile { model, pretty } => compile(&model, pretty, context).await?,
        Command::Execute {
            model,
            sql,
            connection,
            visualization,
        } => {
            let source = match (model, sql) {
                (_, Some(sql)) => Source::Sql(sql),
                (Some(model), None) => Source::Model(model),
                (None, None) => anyhow::bail!("either --model or --sql is required"),
            };
            execute(source, connection, visualization, context).await?;
        }
        Command::Schema { saved_query } => schema(saved_query, context)?,
    };
    Ok(())
}

/// Initialize an empty directory with a configuration that reads the execution endpoint
/// and API key from the environment.
async fn initialize<Env: Environment, Out: Write>(
    force: bool,
    context: Context<Env, Out>,
) -> anyhow::Result<()> {
    let configuration_file = context
        .context_path
        .join(configuration::CONFIGURATION_FILENAME);
    if !force && fs::try_exists(&configuration_file).await? {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite it",
            configuration_file.display()
        );
    }

    configuration::write_parsed_configuration(ParsedConfiguration::initial(), &context.context_path)
        .await?;
    tracing::info!(path = %context.context_path.display(), "Configuration initialized");
    Ok(())
}

async fn compile<Env: Environment, Out: Write>(
    model_path: &Path,
    pretty: bool,
    mut context: Context<Env, Out>,
) -> anyhow::Result<()> {
    let query: model::QueryModel = read_json(model_path).await?;
    for warning in query.warnings() {
        tracing::warn!(%warning, "Query model warning");
    }

    let sql = translation::compile(&query);
    let sql = if pretty {
        sqlformat::format(
            &sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        )
    } else {
        sql
    };
    writeln!(context.output, "{sql}")?;
    Ok(())
}

enum Source {
    Model(PathBuf),
    Sql(String),
}

async fn execute<Env: Environment, Out: Write>(
    source: Source,
    connection_id: String,
    visualization: Option<PathBuf>,
    mut context: Context<Env, Out>,
) -> anyhow::Result<()> {
    let parsed = configuration::parse_configuration(&context.context_path).await?;
    let runtime = configuration::make_runtime_configuration(parsed, &context.environment)?;
    let state =
        query_builder::create_state(&runtime, &mut prometheus::Registry::new()).await?;

    let mut session = Session::new(state.executor, InMemoryGateway::new(), TracingNotifier);
    session.bind_connection(&model::Connection {
        id: connection_id.clone(),
        name: connection_id,
        connection_type: model::ConnectionType::Database,
        config: serde_json::Value::Null,
    });
    if let Some(path) = visualization {
        session.set_visualization(read_json(&path).await?);
    }
    match source {
        Source::Model(path) => {
            let query: model::QueryModel = read_json(&path).await?;
            session.update_model(|model| *model = query);
        }
        Source::Sql(sql) => session.edit_sql(sql),
    }

    let cancellation = CancellationToken::new();
    let on_interrupt = cancellation.clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });
    let result = session.execute(&cancellation).await;
    interrupt.abort();

    let presentation = result?;
    serde_json::to_writer_pretty(&mut context.output, presentation)?;
    writeln!(context.output)?;
    Ok(())
}

fn schema<Env: Environment, Out: Write>(
    saved_query: bool,
    mut context: Context<Env, Out>,
) -> anyhow::Result<()> {
    let schema = if saved_query {
        schemars::schema_for!(model::SavedQuery)
    } else {
        schemars::schema_for!(model::QueryModel)
    };
    serde_json::to_writer_pretty(&mut context.output, &schema)?;
    writeln!(context.output)?;
    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = if path == Path::new("-") {
        tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin())).await??
    } else {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?
    };
    serde_json::from_str(&contents).with_context(|| format!("could not parse {}", path.display()))
}
