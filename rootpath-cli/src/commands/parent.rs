//! Parent command implementation.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::Args;

/// Print the parent of a path. Fails with exit code 1 at a root.
#[derive(Args)]
pub struct ParentCommand {
    /// Absolute path
    pub path: String,
}

impl ParentCommand {
    /// Execute the parent command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let parent = path
            .parent()
            .ok_or_else(|| CliError::SemanticFailure(format!("{path} is a root")))?;

        println!("{parent}");
        Ok(())
    }
}
