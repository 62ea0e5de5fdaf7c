//! Database locator for `SQLite` files kept under the storage root.
//!
//! This module resolves where a database file lives within a
//! [`StorageLayout`](crate::StorageLayout) and opens a connection to it. It
//! does not define schemas, queries or migrations.
//!
//! # Examples
//!
//! ```no_run
//! use rootpath::config::ConfigBuilder;
//! use rootpath::database::{Database, DatabaseOptions};
//! use rootpath::StorageLayout;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let layout = StorageLayout::from_config(&config).unwrap();
//! let options = DatabaseOptions::from_config(&config).unwrap();
//!
//! let db = Database::open(&layout, options).unwrap();
//! db.connection()
//!     .execute_batch("CREATE TABLE IF NOT EXISTS notes (body TEXT)")
//!     .unwrap();
//! ```

mod config;
mod connection;

// Re-export public API
pub use config::{DatabaseOptions, DatabaseOptionsBuilder};
pub use connection::Database;
