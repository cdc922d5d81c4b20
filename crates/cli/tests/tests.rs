use std::path::{Path, PathBuf};

use query_builder_cli::{run, Command, Context};
use query_builder_configuration::environment::FixedEnvironment;
use query_builder_configuration::version1::{
    DEFAULT_API_KEY_VARIABLE, DEFAULT_EXECUTION_ENDPOINT_VARIABLE,
};
use query_builder_configuration::{CONFIGURATION_FILENAME, CONFIGURATION_JSONSCHEMA_FILENAME};
use tests_common::execution_service::{MockExecutionService, Reply};
use tests_common::fixtures;

async fn run_in(
    dir: &Path,
    environment: FixedEnvironment,
    command: Command,
) -> anyhow::Result<String> {
    let mut output = Vec::new();
    run(
        command,
        Context {
            context_path: dir.to_path_buf(),
            environment,
            output: &mut output,
        },
    )
    .await?;
    Ok(String::from_utf8(output)?)
}

fn write_model(dir: &Path) -> PathBuf {
    let path = dir.join("revenue.json");
    std::fs::write(
        &path,
        serde_json::to_string(&fixtures::revenue_by_region()).unwrap(),
    )
    .unwrap();
    path
}

#[tokio::test]
async fn initialize_writes_configuration_and_schema() {
    let dir = tempfile::tempdir().unwrap();

    run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Initialize { force: false },
    )
    .await
    .unwrap();

    assert!(dir.path().join(CONFIGURATION_FILENAME).exists());
    assert!(dir.path().join(CONFIGURATION_JSONSCHEMA_FILENAME).exists());
}

#[tokio::test]
async fn initialize_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let initialize = |force| Command::Initialize { force };

    run_in(dir.path(), FixedEnvironment::default(), initialize(false))
        .await
        .unwrap();

    assert!(
        run_in(dir.path(), FixedEnvironment::default(), initialize(false))
            .await
            .is_err()
    );
    run_in(dir.path(), FixedEnvironment::default(), initialize(true))
        .await
        .unwrap();
}

#[tokio::test]
async fn compile_prints_the_sql() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(dir.path());

    let output = run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Compile {
            model,
            pretty: false,
        },
    )
    .await
    .unwrap();

    insta::assert_snapshot!(output.trim_end(), @r"
    SELECT orders.region AS label, SUM(orders.amount) AS value
    FROM orders
    WHERE status != 'void'
    GROUP BY orders.region
    ORDER BY value DESC
    ");
}

#[tokio::test]
async fn pretty_output_is_only_for_display() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(dir.path());

    let plain = run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Compile {
            model: model.clone(),
            pretty: false,
        },
    )
    .await
    .unwrap();
    let pretty = run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Compile {
            model,
            pretty: true,
        },
    )
    .await
    .unwrap();

    assert_ne!(plain, pretty);
    assert!(pretty.contains("SUM(orders.amount) AS value"));
}

#[tokio::test]
async fn compile_reports_unreadable_models() {
    let dir = tempfile::tempdir().unwrap();

    let error = run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Compile {
            model: dir.path().join("missing.json"),
            pretty: false,
        },
    )
    .await
    .unwrap_err();

    assert!(error.to_string().starts_with("could not read"));
}

#[tokio::test]
async fn execute_prints_the_shaped_result() {
    let service = MockExecutionService::start(Reply::rows(serde_json::json!([
        {"label": "north", "value": 1200},
        {"label": "south", "value": 800}
    ])))
    .await;
    let dir = tempfile::tempdir().unwrap();
    run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Initialize { force: false },
    )
    .await
    .unwrap();
    let model = write_model(dir.path());
    let environment = FixedEnvironment::from([
        (DEFAULT_EXECUTION_ENDPOINT_VARIABLE.into(), service.url()),
        (DEFAULT_API_KEY_VARIABLE.into(), "cli-key".to_string()),
    ]);

    let output = run_in(
        dir.path(),
        environment,
        Command::Execute {
            model: Some(model),
            sql: None,
            connection: "warehouse".to_string(),
            visualization: None,
        },
    )
    .await
    .unwrap();

    let presentation: serde_json::Value = serde_json::from_str(&output).unwrap();
    similar_asserts::assert_eq!(
        presentation,
        serde_json::json!({
            "kind": "table",
            "title": "Query Results",
            "table": {
                "headers": ["label", "value"],
                "rows": [["north", 1200], ["south", 800]]
            }
        })
    );
    assert_eq!(
        service.received()[0].authorization.as_deref(),
        Some("Bearer cli-key")
    );
}

#[tokio::test]
async fn execute_needs_the_environment() {
    let dir = tempfile::tempdir().unwrap();
    run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Initialize { force: false },
    )
    .await
    .unwrap();

    let error = run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Execute {
            model: None,
            sql: Some("SELECT 1".to_string()),
            connection: "warehouse".to_string(),
            visualization: None,
        },
    )
    .await
    .unwrap_err();

    assert!(error
        .to_string()
        .contains(DEFAULT_EXECUTION_ENDPOINT_VARIABLE));
}

#[tokio::test]
async fn schema_describes_query_models() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(
        dir.path(),
        FixedEnvironment::default(),
        Command::Schema { saved_query: false },
    )
    .await
    .unwrap();

    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(schema["title"], "QueryModel");
}
