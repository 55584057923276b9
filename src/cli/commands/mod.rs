//! Command implementations for the csv-atlas CLI
//!
//! Each subcommand lives in its own module:
//! - [`headers`] - List header columns
//! - [`values`] - Print tokenized rows
//! - [`check`] - Full-parse classification report

pub mod check;
pub mod headers;
pub mod values;

use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::cli::args::{Args, Commands};
use crate::config::CsvConfig;
use crate::reader::CsvReader;

/// Main command runner
///
/// Sets up logging from the chosen subcommand's verbosity, then dispatches.
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(args.command.reader_options().get_log_level())?;

    match &args.command {
        Commands::Headers(file) => {
            headers::run_headers(file)?;
        }
        Commands::Values(values) => {
            values::run_values(values)?;
        }
        Commands::Check(file) => {
            check::run_check(file)?;
        }
    }

    Ok(())
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_atlas={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Open `path` as a reader with the given configuration
pub fn open_reader(path: &Path, config: CsvConfig) -> anyhow::Result<CsvReader<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    debug!("Opened {}", path.display());

    Ok(CsvReader::new(config, BufReader::new(file)))
}
