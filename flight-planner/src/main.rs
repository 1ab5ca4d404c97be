use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flight_planner::input::{self, LoadError};
use flight_planner::output::{self, RoutesDocument};
use flight_planner::planner::{ConfigError, SearchConfig, find_routes};

/// Find flight combinations of two or more connecting segments and price
/// them for every number of checked bags.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input CSV file with one flight per row
    input_csv: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimum hours between arrival and connecting departure
    #[arg(long, default_value_t = 1)]
    min_connection_hours: i64,

    /// Maximum hours between arrival and connecting departure
    #[arg(long, default_value_t = 4)]
    max_connection_hours: i64,

    /// Search from each starting flight in parallel
    #[arg(long)]
    parallel: bool,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

/// Errors that end the process with a failure code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("cannot create {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Flush(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = SearchConfig::new(
        args.min_connection_hours,
        args.max_connection_hours,
        args.parallel,
    );
    let window = config.connection_window()?;

    let flights = input::load_path(&args.input_csv, window)?;

    let result = find_routes(&flights, &config);
    info!(
        routes = result.routes.len(),
        connections = result.connections_explored,
        "Found flight combinations"
    );

    let document = output::assemble(&flights, result.routes);
    write_document(&document, args)
}

fn write_document(document: &RoutesDocument, args: &Args) -> Result<(), CliError> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            output::write_json(document, &mut writer, args.compact)?;
            writer.flush()?;
            info!(path = %path.display(), "Wrote routes");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            output::write_json(document, &mut writer, args.compact)?;
            writer.flush()?;
        }
    }
    Ok(())
}
