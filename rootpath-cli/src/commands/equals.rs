//! Equals command implementation.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::Args;

/// Compare two paths. Exits with code 1 when they differ.
///
/// Drive-rooted paths compare case-insensitively, `/`-rooted paths
/// case-sensitively.
#[derive(Args)]
pub struct EqualsCommand {
    /// First path
    pub left: String,

    /// Second path
    pub right: String,
}

impl EqualsCommand {
    /// Execute the equals command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let left = parse_path(&self.left)?;
        let right = parse_path(&self.right)?;

        if left != right {
            return Err(CliError::SemanticFailure(format!(
                "{left} and {right} are different paths"
            )));
        }

        if !global.quiet {
            println!("equal");
        }
        Ok(())
    }
}
