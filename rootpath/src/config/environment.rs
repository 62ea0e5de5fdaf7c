//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOTPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the storage root directory.
pub const ROOT_DIR_ENV: &str = "ROOTPATH_ROOT_DIR";
/// Overrides the database directory under the root.
pub const DATABASE_DIR_ENV: &str = "ROOTPATH_DATABASE_DIR";
/// Overrides the database file name.
pub const DATABASE_FILE_ENV: &str = "ROOTPATH_DATABASE_FILE";
/// Opens databases read-only when true.
pub const READ_ONLY_ENV: &str = "ROOTPATH_READ_ONLY";
/// Overrides the database busy timeout in milliseconds.
pub const BUSY_TIMEOUT_ENV: &str = "ROOTPATH_BUSY_TIMEOUT_MS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rootpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(root) = env::var(ROOT_DIR_ENV) {
            log::debug!("{ROOT_DIR_ENV} overrides root directory: {root}");
            config.root_directory = Some(root);
        }

        if let Ok(directory) = env::var(DATABASE_DIR_ENV) {
            config.database_directory = Some(directory);
        }

        Self::apply_database_overrides(config)
    }

    /// Apply database-related environment variable overrides.
    fn apply_database_overrides(config: &mut Config) -> Result<()> {
        let mut database = config.database.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(file_name) = env::var(DATABASE_FILE_ENV) {
            database.file_name = Some(file_name);
            modified = true;
        }

        if let Ok(val) = env::var(READ_ONLY_ENV) {
            database.read_only = Some(Self::parse_bool(READ_ONLY_ENV, &val)?);
            modified = true;
        }

        if let Ok(millis) = env::var(BUSY_TIMEOUT_ENV) {
            database.busy_timeout_ms = Some(millis.trim().parse().map_err(|_| Error::Validation {
                field: BUSY_TIMEOUT_ENV.into(),
                message: "Must be a positive integer".into(),
            })?);
            modified = true;
        }

        if modified {
            config.database = Some(database);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DatabaseSettings;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [
        ROOT_DIR_ENV,
        DATABASE_DIR_ENV,
        DATABASE_FILE_ENV,
        READ_ONLY_ENV,
        BUSY_TIMEOUT_ENV,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "YES", "on", "ON"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let result = EnvironmentConfig::parse_bool("test", "maybe");
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_overrides_applied() {
        clear_env();
        env::set_var(ROOT_DIR_ENV, "/srv/data");
        env::set_var(DATABASE_DIR_ENV, "Stores");
        env::set_var(DATABASE_FILE_ENV, "main");
        env::set_var(READ_ONLY_ENV, "yes");
        env::set_var(BUSY_TIMEOUT_ENV, " 750 ");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();
        result.unwrap();

        assert_eq!(config.root_directory.as_deref(), Some("/srv/data"));
        assert_eq!(config.database_directory(), "Stores");
        let database = config.database.unwrap();
        assert_eq!(database.file_name.as_deref(), Some("main"));
        assert_eq!(database.read_only, Some(true));
        assert_eq!(database.busy_timeout_ms, Some(750));
        assert_eq!(database.shared_cache, None);
    }

    #[test]
    #[serial]
    fn test_overrides_keep_unrelated_database_fields() {
        clear_env();
        env::set_var(DATABASE_FILE_ENV, "other");

        let mut config = Config {
            database: Some(DatabaseSettings {
                shared_cache: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();
        result.unwrap();

        let database = config.database.unwrap();
        assert_eq!(database.file_name.as_deref(), Some("other"));
        assert_eq!(database.shared_cache, Some(false));
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_rejected() {
        clear_env();
        env::set_var(BUSY_TIMEOUT_ENV, "soon");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(matches!(result, Err(Error::Validation { field, .. }) if field == BUSY_TIMEOUT_ENV));
    }
}
