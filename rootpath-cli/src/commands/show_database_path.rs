//! Command to show where a database file is stored.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_layout, GlobalOptions};
use clap::Args;
use rootpath::DatabaseOptions;

/// Show where a database file would be stored.
///
/// The file is not created or opened.
#[derive(Args)]
pub struct ShowDatabasePathCommand {
    /// Database file name without extension (defaults to the configured one)
    pub name: Option<String>,
}

impl ShowDatabasePathCommand {
    /// Execute the show-database-path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let layout = resolve_layout(&config)?;

        let options = match self.name {
            Some(name) => DatabaseOptions::builder(name).build(),
            None => DatabaseOptions::from_config(&config),
        }
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let path = layout.database_file(&options)?;
        println!("{path}");
        Ok(())
    }
}
