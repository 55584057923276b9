//! Headers command: list the columns of the header row

use anyhow::Context;
use colored::*;
use tracing::info;

use super::open_reader;
use crate::cli::args::FileArgs;

/// Print the header columns of a file and return how many there are
pub fn run_headers(args: &FileArgs) -> anyhow::Result<usize> {
    let config = args.options.to_config().context("Invalid reader options")?;

    if !config.contains_header_row() {
        println!("{}", "Header row disabled; no columns to list".yellow());
        return Ok(0);
    }

    let mut reader = open_reader(&args.path, config)?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read headers from {}", args.path.display()))?;

    info!("Found {} header column(s)", headers.len());

    if headers.is_empty() {
        println!("{}", "No quoted header columns found".yellow());
        return Ok(0);
    }

    println!(
        "{} {}",
        "Header columns in".bright_green().bold(),
        args.path.display().to_string().bright_cyan()
    );
    for (index, name) in headers.iter().enumerate() {
        println!("  {} {}", format!("{:>3}.", index).bright_yellow(), name);
    }

    Ok(headers.len())
}
