//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    EqualsCommand, InspectCommand, JoinCommand, ListCommand, NormalizeCommand, ParentCommand,
    ShowDatabasePathCommand, ShowLayoutCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for normalizing and combining absolute paths.
#[derive(Parser)]
#[command(name = "rootpath")]
#[command(version, about = "Normalize, combine and inspect absolute paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the storage root directory
    #[arg(long, value_name = "PATH", global = true, env = "ROOTPATH_ROOT_DIR")]
    pub root_dir: Option<String>,

    /// Read config.yaml from this directory instead of the storage root
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized form of an absolute path
    Normalize(NormalizeCommand),

    /// Append relative suffixes to a base path
    Join(JoinCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Show the root, name and extension of a path
    Inspect(InspectCommand),

    /// Compare two paths using their root's case rules
    Equals(EqualsCommand),

    /// List files or directories below a directory
    List(ListCommand),

    /// Show the resolved storage root and database directory
    ShowLayout(ShowLayoutCommand),

    /// Show where a database file would be stored
    ShowDatabasePath(ShowDatabasePathCommand),
}
