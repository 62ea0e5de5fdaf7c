//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rootpath: where the
//! storage root lives, where databases are kept beneath it, and how database
//! connections are opened.

use serde::{Deserialize, Serialize};

/// Name of the database directory under the root when none is configured.
pub const DEFAULT_DATABASE_DIRECTORY: &str = "Databases";

/// Busy timeout applied to database connections when none is configured.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Database file name used when none is configured.
pub const DEFAULT_DATABASE_FILE: &str = "rootpath";

/// Name of the configuration file looked up in a configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, DatabaseSettings};
///
/// let config = Config {
///     root_directory: Some("/var/lib/rootpath".to_string()),
///     database: Some(DatabaseSettings {
///         file_name: Some("inventory".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.database_directory(), "Databases");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Absolute storage root. Defaults to the platform data directory.
    pub root_directory: Option<String>,

    /// Database directory, relative to the root.
    pub database_directory: Option<String>,

    /// Database connection settings.
    pub database: Option<DatabaseSettings>,
}

impl Config {
    /// Built-in defaults, the lowest configuration layer.
    ///
    /// The root directory is left unset; it is resolved from the platform
    /// data directory when a storage layout is built.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            root_directory: None,
            database_directory: Some(DEFAULT_DATABASE_DIRECTORY.to_string()),
            database: Some(DatabaseSettings {
                file_name: Some(DEFAULT_DATABASE_FILE.to_string()),
                read_only: Some(false),
                shared_cache: Some(true),
                busy_timeout_ms: Some(DEFAULT_BUSY_TIMEOUT_MS),
            }),
        }
    }

    /// The configured database directory, or [`DEFAULT_DATABASE_DIRECTORY`].
    #[must_use]
    pub fn database_directory(&self) -> &str {
        self.database_directory
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_DIRECTORY)
    }
}

/// Database connection settings.
///
/// # Examples
///
/// ```
/// use rootpath::config::DatabaseSettings;
///
/// let settings: DatabaseSettings =
///     serde_yaml::from_str("file_name: cache\nbusy_timeout_ms: 250\n").unwrap();
/// assert_eq!(settings.file_name.as_deref(), Some("cache"));
/// assert_eq!(settings.busy_timeout_ms, Some(250));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Database file name without the `.db3` extension.
    pub file_name: Option<String>,

    /// Open connections read-only.
    pub read_only: Option<bool>,

    /// Use `SQLite`'s shared cache mode.
    pub shared_cache: Option<bool>,

    /// Milliseconds to wait on a locked database.
    pub busy_timeout_ms: Option<u64>,
}
