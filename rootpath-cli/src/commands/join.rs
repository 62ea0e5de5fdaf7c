//! Join command implementation.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::Args;

/// Append relative suffixes to a base path.
#[derive(Args)]
pub struct JoinCommand {
    /// Absolute base path
    pub base: String,

    /// Relative suffixes, appended in order
    #[arg(required = true, num_args = 1..)]
    pub suffixes: Vec<String>,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut path = parse_path(&self.base)?;
        for suffix in &self.suffixes {
            path = path.join(suffix)?;
            log::debug!("Joined '{suffix}': {path}");
        }

        println!("{path}");
        Ok(())
    }
}
