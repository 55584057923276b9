//! Values command: print tokenized rows

use anyhow::Context;
use colored::*;
use tracing::info;

use super::open_reader;
use crate::cli::args::ValuesArgs;

/// Print each row's field values and return the number of rows printed
pub fn run_values(args: &ValuesArgs) -> anyhow::Result<usize> {
    let config = args
        .file
        .options
        .to_config()
        .context("Invalid reader options")?;
    let mut reader = open_reader(&args.file.path, config)?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let separator = " | ".bright_black().to_string();

    let mut printed = 0;
    while printed < limit {
        let Some(values) = reader
            .next_values()
            .with_context(|| format!("Failed to read {}", args.file.path.display()))?
        else {
            break;
        };

        let index = reader.current_index().unwrap_or(printed);
        println!(
            "{} {}",
            format!("{:>6}", index).bright_black(),
            values.join(separator.as_str())
        );
        printed += 1;
    }

    info!("Printed {} row(s)", printed);
    Ok(printed)
}
