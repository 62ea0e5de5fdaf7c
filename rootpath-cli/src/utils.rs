//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including argument parsing, configuration loading, storage layout
//! resolution and output formatting.

use crate::error::CliError;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use rootpath::{AbsolutePath, Config, ConfigBuilder, StorageLayout};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the storage root directory.
    pub root_dir: Option<String>,

    /// Directory holding `config.yaml`.
    pub config_dir: Option<PathBuf>,
}

/// Output format shared by commands that print structured data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `key: value` lines
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Parse a command-line argument as an absolute path.
///
/// Inputs without a root, or whose `..` segments climb above it, are
/// reported as invalid arguments naming the offending value.
pub fn parse_path(arg: &str) -> Result<AbsolutePath, CliError> {
    AbsolutePath::new(arg).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    } else if let Some(ref root) = global.root_dir {
        // An explicit root also hosts its own config.yaml
        builder = builder.with_config_dir(root);
    }

    if let Some(ref root) = global.root_dir {
        builder = builder.with_config(Config {
            root_directory: Some(root.clone()),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the storage layout from configuration.
pub fn resolve_layout(config: &Config) -> Result<StorageLayout, CliError> {
    StorageLayout::from_config(config).map_err(|e| CliError::Config(e.to_string()))
}

/// Format a modification time for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    let dt: DateTime<Local> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Write `key: value` lines with the values aligned.
pub fn print_fields(fields: &[(&str, String)]) -> Result<(), CliError> {
    let width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (key, value) in fields {
        writeln!(handle, "{:<width$}  {value}", format!("{key}:"), width = width + 1)?;
    }
    Ok(())
}
