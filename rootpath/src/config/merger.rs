//! Configuration merging and precedence handling.
//!
//! This module implements layered merging of configuration sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, DatabaseSettings};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, ConfigMerger};
///
/// let low = Config { root_directory: Some("/low".to_string()), ..Default::default() };
/// let high = Config { root_directory: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.root_directory, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Database settings: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root_directory.is_some() {
            target.root_directory.clone_from(&source.root_directory);
        }

        if source.database_directory.is_some() {
            target
                .database_directory
                .clone_from(&source.database_directory);
        }

        if let Some(ref source_database) = source.database {
            target.database = Some(match &target.database {
                Some(target_database) => Self::merge_database(target_database, source_database),
                None => source_database.clone(),
            });
        }
    }

    /// Merge database settings. Source values take precedence.
    fn merge_database(target: &DatabaseSettings, source: &DatabaseSettings) -> DatabaseSettings {
        DatabaseSettings {
            file_name: source.file_name.clone().or_else(|| target.file_name.clone()),
            read_only: source.read_only.or(target.read_only),
            shared_cache: source.shared_cache.or(target.shared_cache),
            busy_timeout_ms: source.busy_timeout_ms.or(target.busy_timeout_ms),
        }
    }
}
