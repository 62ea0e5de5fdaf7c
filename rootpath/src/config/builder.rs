//! Layered configuration construction.
//!
//! [`ConfigBuilder`] merges, from lowest to highest precedence: built-in
//! defaults, the user configuration file, `ROOTPATH_*` environment
//! variables, and programmatic overrides. The result is validated before it
//! is returned.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::storage::default_root_directory;

/// Builder for the effective configuration.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         root_directory: Some("/srv/rootpath".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.root_directory.as_deref(), Some("/srv/rootpath"));
/// assert_eq!(config.database_directory(), "Databases");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `ROOTPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Read `config.yaml` from `dir` instead of the default root directory.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Layer a programmatic configuration on top of all other sources.
    ///
    /// May be called repeatedly; later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the merged configuration fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::with_defaults();

        if !self.skip_files {
            if let Some(dir) = self.resolve_config_dir() {
                if let Some(source) = ConfigLoader::load_user_config(&dir)? {
                    ConfigValidator::validate(&source.config)?;
                    ConfigMerger::merge_into(&mut config, &source.config);
                }
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn resolve_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.config_dir {
            return Some(dir.clone());
        }
        match default_root_directory() {
            Ok(root) => Some(root.into()),
            Err(e) => {
                log::debug!("Skipping user configuration: {e}");
                None
            }
        }
    }
}
