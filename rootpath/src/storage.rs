//! Storage layout: where rootpath keeps its files.
//!
//! A [`StorageLayout`] is an explicit value carrying the resolved root and
//! database directories. It is built once from configuration and passed to
//! whatever needs it, such as [`Database::open`](crate::Database::open).

use std::env;

use serde::Serialize;

use crate::config::schema::DEFAULT_DATABASE_DIRECTORY;
use crate::config::{Config, ConfigValidator};
use crate::database::DatabaseOptions;
use crate::error::{Error, Result};
use crate::path::AbsolutePath;

/// Directory created under the platform data directory.
pub const APPLICATION_DIRECTORY: &str = "rootpath";

/// Extension given to database files.
pub const DATABASE_EXTENSION: &str = "db3";

/// Returns the default root directory for rootpath.
///
/// The platform local data directory joined with `rootpath`:
/// - `%LOCALAPPDATA%\rootpath` on Windows
/// - `$XDG_DATA_HOME/rootpath` elsewhere, falling back to
///   `~/.local/share/rootpath`
///
/// # Errors
///
/// Returns an error if neither the data directory variable nor the home
/// directory can be determined.
///
/// # Examples
///
/// ```no_run
/// use rootpath::storage::default_root_directory;
///
/// let root = default_root_directory().unwrap();
/// println!("Root directory: {root}");
/// ```
pub fn default_root_directory() -> Result<AbsolutePath> {
    platform_data_directory()?.join(APPLICATION_DIRECTORY)
}

#[cfg(windows)]
fn platform_data_directory() -> Result<AbsolutePath> {
    if let Some(local) = env::var_os("LOCALAPPDATA") {
        return AbsolutePath::from_path(std::path::Path::new(&local));
    }
    home_relative(&["AppData", "Local"])
}

#[cfg(not(windows))]
fn platform_data_directory() -> Result<AbsolutePath> {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        // Relative values are invalid per the XDG spec and are ignored
        if let Ok(path) = AbsolutePath::from_path(std::path::Path::new(&xdg)) {
            return Ok(path);
        }
    }
    home_relative(&[".local", "share"])
}

fn home_relative(segments: &[&str]) -> Result<AbsolutePath> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "root_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    AbsolutePath::from_path(&home)?.join(&segments.join("/"))
}

/// Resolved locations of the storage root and the database directory.
///
/// # Examples
///
/// ```
/// use rootpath::{AbsolutePath, StorageLayout};
///
/// let layout = StorageLayout::new(AbsolutePath::new("/srv/app").unwrap()).unwrap();
/// assert_eq!(layout.database_directory().as_str(), "/srv/app/Databases");
///
/// let layout = layout.with_database_directory("stores/sqlite").unwrap();
/// assert_eq!(layout.database_directory().as_str(), "/srv/app/stores/sqlite");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageLayout {
    root_directory: AbsolutePath,
    database_directory: AbsolutePath,
}

impl StorageLayout {
    /// Create a layout rooted at `root` with the default database directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database directory cannot be joined to `root`.
    pub fn new(root: AbsolutePath) -> Result<Self> {
        let database_directory = root.join(DEFAULT_DATABASE_DIRECTORY)?;
        Ok(Self {
            root_directory: root,
            database_directory,
        })
    }

    /// Build the layout described by a configuration.
    ///
    /// An unset root directory resolves to [`default_root_directory`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured root is not an absolute path, the
    /// database directory is not relative, or the default root cannot be
    /// determined.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = match config.root_directory {
            Some(ref root) => AbsolutePath::new(root)?,
            None => default_root_directory()?,
        };
        let layout = Self::new(root)?.with_database_directory(config.database_directory())?;
        log::debug!(
            "Storage layout: root {}, databases {}",
            layout.root_directory,
            layout.database_directory
        );
        Ok(layout)
    }

    /// Replace the database directory with `name`, resolved under the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` is rooted, empty, or escapes
    /// the root directory.
    pub fn with_database_directory(mut self, name: &str) -> Result<Self> {
        ConfigValidator::validate_relative_directory("database_directory", name)?;
        self.database_directory = self.root_directory.join(name)?;
        Ok(self)
    }

    /// The storage root.
    #[must_use]
    pub fn root_directory(&self) -> &AbsolutePath {
        &self.root_directory
    }

    /// The directory holding database files.
    #[must_use]
    pub fn database_directory(&self) -> &AbsolutePath {
        &self.database_directory
    }

    /// Location of the database file for `options`: `{database_directory}/{file_name}.db3`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file name cannot be joined to the database
    /// directory.
    pub fn database_file(&self, options: &DatabaseOptions) -> Result<AbsolutePath> {
        self.database_directory
            .join(&format!("{}.{DATABASE_EXTENSION}", options.file_name()))
    }

    /// Create the root and database directories if they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn ensure_directories(&self) -> Result<()> {
        self.root_directory.create_directory()?;
        self.database_directory.create_directory()?;
        Ok(())
    }
}
