//! Main entry point for the rootpath CLI.
//!
//! This is the command-line interface for the rootpath library. It provides
//! commands for working with absolute paths:
//! - `normalize`, `join`, `parent`: Build canonical paths
//! - `inspect`, `equals`: Examine paths
//! - `list`: Enumerate a directory
//! - `show-layout`, `show-database-path`: Report storage locations

use clap::Parser;
use rootpath_cli::cli::{Cli, Command};
use rootpath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route the log facade through the CLI logger
    rootpath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root_dir: cli.root_dir,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Parent(cmd) => cmd.execute(&global),
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::Equals(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::ShowLayout(cmd) => cmd.execute(&global),
        Command::ShowDatabasePath(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
