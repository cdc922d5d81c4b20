//! The `query-builder` command line tool.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use query_builder_cli::*;
use query_builder_configuration::environment::ProcessEnvironment;

/// The query builder: compile query models to SQL and execute them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the configuration. Defaults to the current directory.
    #[arg(long = "context", env = "QUERY_BUILDER_CONTEXT_PATH", value_name = "PATH")]
    context_path: Option<PathBuf>,
    /// The command to invoke.
    #[command(subcommand)]
    subcommand: Command,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let context_path = match args.context_path {
        Some(path) => path,
        None => match env::current_dir() {
            Ok(path) => path,
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        },
    };
    let context = Context {
        context_path,
        environment: ProcessEnvironment,
        output: std::io::stdout(),
    };

    match run(args.subcommand, context).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
