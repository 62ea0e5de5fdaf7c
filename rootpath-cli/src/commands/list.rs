//! List command implementation.
//!
//! This module implements the `list` command, which enumerates files or
//! directories below a directory, one path per line.

use crate::error::CliError;
use crate::utils::{format_timestamp, parse_path, GlobalOptions};
use clap::{Args, ValueEnum};
use rootpath::AbsolutePath;
use std::io::Write;

/// List files or directories below a directory.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to enumerate
    pub directory: String,

    /// What to list
    #[arg(long, value_enum, default_value = "files", ignore_case = true)]
    pub kind: ListKind,

    /// Wildcard pattern matched against names (`*` and `?`)
    #[arg(long, default_value = "*")]
    pub pattern: String,

    /// Number of directory levels to descend (1 = the directory itself)
    #[arg(long, default_value_t = 1, conflicts_with = "recursive")]
    pub depth: usize,

    /// Descend into every subdirectory
    #[arg(long)]
    pub recursive: bool,

    /// Prefix each entry with its modification time
    #[arg(long)]
    pub long: bool,
}

/// Entry kind for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListKind {
    /// Regular files
    Files,
    /// Directories
    Directories,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let directory = parse_path(&self.directory)?;
        if !directory.directory_exists() {
            return Err(CliError::InvalidArguments(format!(
                "{directory} is not a directory"
            )));
        }

        let depth = if self.recursive { usize::MAX } else { self.depth };
        let entries = match self.kind {
            ListKind::Files => directory.files(&self.pattern, depth)?,
            ListKind::Directories => directory.directories(&self.pattern, depth)?,
        };
        log::debug!("{} entries below {directory}", entries.len());

        print_entries(&entries, self.long)
    }
}

fn print_entries(entries: &[AbsolutePath], long: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for entry in entries {
        if long {
            let modified = entry.metadata()?.modified()?;
            writeln!(handle, "{}\t{entry}", format_timestamp(modified))?;
        } else {
            writeln!(handle, "{entry}")?;
        }
    }

    Ok(())
}
