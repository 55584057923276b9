//! Check command: classify every row and report malformed ones

use anyhow::Context;
use colored::*;
use tracing::info;

use super::open_reader;
use crate::cli::args::FileArgs;
use crate::constants::MAX_REPORTED_ROWS;
use crate::parser::ParseStats;

/// Run a full parse and print a classification report
///
/// Malformed rows fail the command only when the resolved error policy is
/// to fail on bad rows, which `--strict` forces.
pub fn run_check(args: &FileArgs) -> anyhow::Result<ParseStats> {
    let config = args.options.to_config().context("Invalid reader options")?;
    let mut reader = open_reader(&args.path, config)?;

    let failure = match reader.parse() {
        Ok(_) => None,
        Err(error) if error.bad_rows().is_some() => Some(error),
        Err(error) => {
            return Err(error).with_context(|| format!("Failed to parse {}", args.path.display()));
        }
    };

    let stats = reader.stats().unwrap_or_default();
    info!(
        "Checked {}: {} of {} row(s) valid",
        args.path.display(),
        stats.valid_rows,
        stats.total_rows
    );

    println!(
        "{} {}",
        "Checked".bright_green().bold(),
        args.path.display().to_string().bright_cyan()
    );
    println!("  Rows:      {}", stats.total_rows);
    println!("  Valid:     {}", stats.valid_rows.to_string().green());
    if stats.is_clean() {
        println!("  Malformed: {}", "0".green());
    } else {
        println!("  Malformed: {}", stats.error_rows.to_string().red().bold());
    }
    println!("  Success:   {:.1}%", stats.success_rate());

    if let Some(error_rows) = reader.error_rows().filter(|rows| !rows.is_empty()) {
        println!();
        println!("{}", "Malformed rows:".bright_red().bold());
        for (index, line) in error_rows.iter().take(MAX_REPORTED_ROWS) {
            println!("  {} {}", format!("{:>6}", index).bright_yellow(), line);
        }
        if error_rows.len() > MAX_REPORTED_ROWS {
            println!(
                "  {}",
                format!("... and {} more", error_rows.len() - MAX_REPORTED_ROWS).bright_black()
            );
        }
    }

    if let Some(error) = failure {
        return Err(error).with_context(|| format!("{} is not clean", args.path.display()));
    }

    Ok(stats)
}
