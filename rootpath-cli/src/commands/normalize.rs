//! Normalize command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use rootpath::path::normalize::normalize_path;

/// Print the normalized form of an absolute path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    pub path: String,

    /// Separator to use instead of the root's canonical one
    #[arg(long, value_name = "CHAR")]
    pub separator: Option<char>,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let normalized = normalize_path(&self.path, self.separator)?;
        println!("{normalized}");
        Ok(())
    }
}
