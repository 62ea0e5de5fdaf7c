#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rootpath
//!
//! Cross-platform absolute path values with root-aware normalization.
//!
//! Paths are recognized by their root, independent of the host platform:
//! `C:` drive roots use `\` and compare case-insensitively, the `/` root
//! uses `/` and compares case-sensitively. Every value is normalized on
//! construction, so `.` and `..` segments and repeated separators never
//! survive.
//!
//! ## Core Types
//!
//! - [`AbsolutePath`]: The normalized absolute path value
//! - [`Root`]: The root family of a path
//! - [`StorageLayout`]: Resolved root and database directories
//! - [`Database`] and [`DatabaseOptions`]: Locating and opening `SQLite` files
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rootpath::AbsolutePath;
//!
//! let base = AbsolutePath::new("C:\\Users\\me").unwrap();
//! let docs = base.join("Documents/./drafts/..").unwrap();
//! assert_eq!(docs.as_str(), "C:\\Users\\me\\Documents");
//! assert_eq!(docs.parent().unwrap(), base);
//!
//! let etc = AbsolutePath::new("/etc").unwrap();
//! assert!(etc.join("/abs").is_err());
//! assert!(etc.join("../..").is_err());
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod path;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseOptions};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{AbsolutePath, EntryKind, Root, SearchDepth};
pub use storage::{default_root_directory, StorageLayout};
