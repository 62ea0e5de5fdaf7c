//! Database connection management.
//!
//! This module opens `SQLite` connections at the location a
//! [`StorageLayout`] assigns to a database file.

use rusqlite::Connection;

use crate::error::Result;
use crate::path::AbsolutePath;
use crate::storage::StorageLayout;

use super::config::DatabaseOptions;

/// An open database connection and the file it belongs to.
///
/// # Examples
///
/// ```no_run
/// use rootpath::database::{Database, DatabaseOptions};
/// use rootpath::{AbsolutePath, StorageLayout};
///
/// let layout = StorageLayout::new(AbsolutePath::new("/tmp/rootpath").unwrap()).unwrap();
/// let options = DatabaseOptions::builder("inventory").build().unwrap();
/// let db = Database::open(&layout, options).unwrap();
/// assert_eq!(db.path().as_str(), "/tmp/rootpath/Databases/inventory.db3");
/// ```
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: AbsolutePath,
    options: DatabaseOptions,
}

impl Database {
    /// Opens the database described by `options` within `layout`.
    ///
    /// This function will:
    /// - Create the database directory if the file may be created
    /// - Open the database with flags derived from `options`
    /// - Configure the busy timeout
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file lives under a root the host cannot resolve
    ///   ([`Error::ForeignRoot`](crate::Error::ForeignRoot))
    /// - The database directory cannot be created
    /// - The database file cannot be opened (for example a missing file
    ///   opened read-only)
    /// - The busy timeout cannot be applied
    pub fn open(layout: &StorageLayout, options: DatabaseOptions) -> Result<Self> {
        let path = layout.database_file(&options)?;

        if options.creates_missing() && !path.file_exists() {
            if let Some(parent) = path.parent() {
                parent.create_directory()?;
            }
        }

        log::debug!("Opening database {path}");
        let conn = Connection::open_with_flags(path.host_path()?, options.open_flags())?;
        conn.busy_timeout(options.busy_timeout())?;

        Ok(Self {
            conn,
            path,
            options,
        })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns a mutable reference to the underlying `SQLite` connection.
    ///
    /// Needed for operations that require mutability, such as transactions.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Location of the database file.
    #[must_use]
    pub const fn path(&self) -> &AbsolutePath {
        &self.path
    }

    /// The options the connection was opened with.
    #[must_use]
    pub const fn options(&self) -> &DatabaseOptions {
        &self.options
    }
}
