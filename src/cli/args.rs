//! Command-line argument definitions for csv-atlas
//!
//! Defines the CLI using the clap derive API. Reader options are shared by
//! every subcommand and resolve into a [`CsvConfig`].

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{CsvConfig, CsvSettings, ErrorPolicy};
use crate::{Error, Result};

/// CLI arguments for the csv-atlas inspector
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv-atlas",
    version,
    about = "Inspect and validate quoted CSV files",
    long_about = "Reads quoted CSV files the same way the csv_atlas library does: lists \
                  header columns, prints tokenized rows and checks every row for \
                  well-formedness."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the header columns of a file
    Headers(FileArgs),
    /// Print tokenized field values row by row
    Values(ValuesArgs),
    /// Classify every row and report malformed ones
    Check(FileArgs),
}

impl Commands {
    /// Reader options of whichever subcommand was chosen
    pub fn reader_options(&self) -> &ReaderOptions {
        match self {
            Self::Headers(args) | Self::Check(args) => &args.options,
            Self::Values(args) => &args.file.options,
        }
    }
}

/// A CSV file plus reader options
#[derive(Debug, Clone, ClapArgs)]
pub struct FileArgs {
    /// CSV file to read
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    #[command(flatten)]
    pub options: ReaderOptions,
}

/// Arguments for the values command
#[derive(Debug, Clone, ClapArgs)]
pub struct ValuesArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// Stop after this many rows
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Options controlling how the file is read
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ReaderOptions {
    /// TOML settings file with a [csv_parser] table
    #[arg(short, long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Quote character (" or ')
    #[arg(short, long, value_name = "CHAR")]
    pub quote: Option<String>,

    /// Treat the first line as data
    #[arg(long)]
    pub no_header: bool,

    /// Keep the surrounding quotes on returned fields
    #[arg(long)]
    pub keep_quotes: bool,

    /// Fail when malformed rows are found
    #[arg(long)]
    pub strict: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ReaderOptions {
    /// Log level implied by the verbosity flag
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Resolve the options into a validated reader configuration
    ///
    /// Settings from `--config` come first and flags override them. Without
    /// `--strict`, malformed rows are tolerated unless the settings file asks
    /// otherwise.
    pub fn to_config(&self) -> Result<CsvConfig> {
        let settings = match &self.config {
            Some(path) => Some(load_settings(path)?),
            None => None,
        };

        let file_policy = settings.as_ref().and_then(CsvSettings::error_policy);
        let mut config = settings
            .as_ref()
            .map(CsvConfig::from_settings)
            .unwrap_or_default();

        let error_policy = if self.strict {
            ErrorPolicy::FailOnBadRows
        } else {
            file_policy.unwrap_or(ErrorPolicy::IgnoreBadRows)
        };
        config = config.with_error_policy(error_policy);

        if let Some(delimiter) = &self.delimiter {
            config = config.with_delimiter(delimiter.as_str());
        }
        if let Some(quote) = &self.quote {
            config = config.with_quote_character(quote.as_str());
        }
        if self.no_header {
            config = config.with_header_row(false);
        }
        if self.keep_quotes {
            config = config.with_remove_field_quotes(false);
        }

        config.validate()?;
        debug!("Resolved reader configuration: {:?}", config);
        Ok(config)
    }
}

/// Read a settings file from disk
pub fn load_settings(path: &Path) -> Result<CsvSettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::io(
            format!("Failed to read settings file {}", path.display()),
            e,
        )
    })?;

    CsvSettings::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_headers_command() {
        let args = Args::try_parse_from(["csv-atlas", "headers", "food.csv"]).unwrap();

        match args.command {
            Commands::Headers(file) => {
                assert_eq!(file.path, PathBuf::from("food.csv"));
                assert!(!file.options.no_header);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_values_command_with_limit() {
        let args = Args::try_parse_from([
            "csv-atlas", "values", "units.csv", "--limit", "5", "-d", ";", "-vv",
        ])
        .unwrap();

        match &args.command {
            Commands::Values(values) => {
                assert_eq!(values.limit, Some(5));
                assert_eq!(values.file.options.delimiter.as_deref(), Some(";"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.command.reader_options().get_log_level(), "debug");
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Args::try_parse_from(["csv-atlas", "check"]).is_err());
    }

    #[test]
    fn test_default_options_tolerate_bad_rows() {
        let config = ReaderOptions::default().to_config().unwrap();

        assert_eq!(config.error_policy(), ErrorPolicy::IgnoreBadRows);
        assert!(config.contains_header_row());
        assert!(config.remove_field_quotes());
    }

    #[test]
    fn test_flags_override_defaults() {
        let options = ReaderOptions {
            delimiter: Some(";".to_string()),
            quote: Some("'".to_string()),
            no_header: true,
            keep_quotes: true,
            strict: true,
            ..Default::default()
        };

        let config = options.to_config().unwrap();

        assert_eq!(config.delimiter(), ";");
        assert_eq!(config.quote_character(), "'");
        assert!(!config.contains_header_row());
        assert!(!config.remove_field_quotes());
        assert_eq!(config.error_policy(), ErrorPolicy::FailOnBadRows);
    }

    #[test]
    fn test_invalid_quote_flag() {
        let options = ReaderOptions {
            quote: Some("!".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            options.to_config(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_settings_file_with_flag_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[csv_parser]\ndelimiter = \"|\"\nthrowErrorOnBadData = true\nread_mode = \"full_parse\""
        )
        .unwrap();

        let options = ReaderOptions {
            config: Some(file.path().to_path_buf()),
            no_header: true,
            ..Default::default()
        };

        let config = options.to_config().unwrap();

        assert_eq!(config.delimiter(), "|");
        assert_eq!(config.error_policy(), ErrorPolicy::FailOnBadRows);
        assert_eq!(config.read_mode(), ReadMode::FullParse);
        assert!(!config.contains_header_row());
    }

    #[test]
    fn test_missing_settings_file() {
        let options = ReaderOptions {
            config: Some(PathBuf::from("/nonexistent/csv_atlas.toml")),
            ..Default::default()
        };

        assert!(matches!(options.to_config(), Err(Error::Io { .. })));
    }
}
