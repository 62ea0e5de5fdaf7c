//! Database connection options.
//!
//! This module provides the options used to locate and open a database file
//! within a [`StorageLayout`](crate::StorageLayout).

use std::time::Duration;

use rusqlite::OpenFlags;

use crate::config::schema::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE_FILE};
use crate::config::{Config, ConfigValidator};
use crate::error::{Error, Result};

/// Options for opening a database connection.
///
/// Build them with [`DatabaseOptions::builder`] or from configuration with
/// [`DatabaseOptions::from_config`].
///
/// # Examples
///
/// ```
/// use rootpath::database::DatabaseOptions;
/// use std::time::Duration;
///
/// let options = DatabaseOptions::builder("inventory")
///     .busy_timeout(Duration::from_millis(250))
///     .build()
///     .unwrap();
/// assert_eq!(options.file_name(), "inventory");
/// assert!(options.shared_cache());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOptions {
    file_name: String,
    read_only: bool,
    create: bool,
    shared_cache: bool,
    busy_timeout: Duration,
}

impl DatabaseOptions {
    /// Start building options for the database file `file_name` (without
    /// extension).
    ///
    /// Defaults:
    /// - read-write, creating the file if missing
    /// - shared cache enabled
    /// - `busy_timeout`: 5000ms
    #[must_use]
    pub fn builder(file_name: impl Into<String>) -> DatabaseOptionsBuilder {
        DatabaseOptionsBuilder {
            options: Self {
                file_name: file_name.into(),
                read_only: false,
                create: true,
                shared_cache: true,
                busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
            },
        }
    }

    /// Options described by the `database` section of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the configured values are invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = config.database.clone().unwrap_or_default();
        let mut builder = Self::builder(
            settings
                .file_name
                .unwrap_or_else(|| DEFAULT_DATABASE_FILE.to_string()),
        );
        if settings.read_only == Some(true) {
            builder = builder.read_only();
        }
        if let Some(shared_cache) = settings.shared_cache {
            builder = builder.shared_cache(shared_cache);
        }
        if let Some(millis) = settings.busy_timeout_ms {
            builder = builder.busy_timeout(Duration::from_millis(millis));
        }
        builder.build()
    }

    /// Database file name without extension.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether connections are opened read-only.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether a missing database file is created.
    #[must_use]
    pub const fn creates_missing(&self) -> bool {
        self.create
    }

    /// Whether `SQLite`'s shared cache mode is requested.
    #[must_use]
    pub const fn shared_cache(&self) -> bool {
        self.shared_cache
    }

    /// How long a connection waits on a locked database.
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        self.busy_timeout
    }

    /// `SQLite` open flags derived from these options.
    #[must_use]
    pub fn open_flags(&self) -> OpenFlags {
        let mut flags = if self.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else if self.create {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        flags |= OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.shared_cache {
            flags |= OpenFlags::SQLITE_OPEN_SHARED_CACHE;
        }
        flags
    }
}

/// Builder for [`DatabaseOptions`].
#[derive(Debug, Clone)]
#[must_use]
pub struct DatabaseOptionsBuilder {
    options: DatabaseOptions,
}

impl DatabaseOptionsBuilder {
    /// Open the database read-only. Read-only connections never create the
    /// file.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::database::DatabaseOptions;
    ///
    /// let options = DatabaseOptions::builder("main").read_only().build().unwrap();
    /// assert!(options.is_read_only());
    /// assert!(!options.creates_missing());
    /// ```
    pub fn read_only(mut self) -> Self {
        self.options.read_only = true;
        self.options.create = false;
        self
    }

    /// Whether to create the database file when it does not exist.
    pub fn create(mut self, create: bool) -> Self {
        self.options.create = create && !self.options.read_only;
        self
    }

    /// Enable or disable shared cache mode.
    pub fn shared_cache(mut self, shared_cache: bool) -> Self {
        self.options.shared_cache = shared_cache;
        self
    }

    /// Set the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.options.busy_timeout = timeout;
        self
    }

    /// Validate and build the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the file name is not a single valid
    /// file name or the busy timeout is zero.
    pub fn build(mut self) -> Result<DatabaseOptions> {
        ConfigValidator::validate_file_name("file_name", &self.options.file_name)?;
        if self.options.busy_timeout.is_zero() {
            return Err(Error::Validation {
                field: "busy_timeout".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        self.options.file_name = self.options.file_name.trim().to_string();
        Ok(self.options)
    }
}
