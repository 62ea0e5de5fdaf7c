//! Command to show the resolved storage layout.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_fields, print_json, resolve_layout, GlobalOptions, OutputFormat,
};
use clap::Args;

/// Show the resolved storage root and database directory.
#[derive(Args)]
pub struct ShowLayoutCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl ShowLayoutCommand {
    /// Execute the show-layout command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let layout = resolve_layout(&config)?;

        match self.format {
            OutputFormat::Json => print_json(&layout),
            OutputFormat::Human => print_fields(&[
                ("root directory", layout.root_directory().to_string()),
                ("database directory", layout.database_directory().to_string()),
            ]),
        }
    }
}
