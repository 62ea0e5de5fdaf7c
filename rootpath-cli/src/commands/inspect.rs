//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which reports the derived
//! accessors of a normalized path as text or JSON.

use crate::error::CliError;
use crate::utils::{parse_path, print_fields, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use rootpath::AbsolutePath;
use serde::Serialize;

/// Show the root, name and extension of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Absolute path
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

/// Everything `inspect` reports about a path.
#[derive(Debug, Serialize)]
struct PathReport {
    path: AbsolutePath,
    root: String,
    separator: char,
    case_sensitive: bool,
    is_root: bool,
    name: String,
    stem: String,
    extension: String,
    parent: Option<AbsolutePath>,
}

impl From<&AbsolutePath> for PathReport {
    fn from(path: &AbsolutePath) -> Self {
        let root = path.root();
        Self {
            path: path.clone(),
            root: root.to_string(),
            separator: root.separator(),
            case_sensitive: !root.is_case_insensitive(),
            is_root: path.is_root(),
            name: path.name().to_string(),
            stem: path.name_without_extension().to_string(),
            extension: path.extension().to_string(),
            parent: path.parent(),
        }
    }
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let report = PathReport::from(&path);

        match self.format {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Human => print_fields(&[
                ("path", report.path.to_string()),
                ("root", report.root),
                ("separator", report.separator.to_string()),
                ("case sensitive", report.case_sensitive.to_string()),
                ("name", report.name),
                ("stem", report.stem),
                ("extension", report.extension),
                (
                    "parent",
                    report
                        .parent
                        .map_or_else(|| "-".to_string(), |p| p.to_string()),
                ),
            ]),
        }
    }
}
