//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print the normalized form of a path
//! - `join`: Append relative suffixes to a base path
//! - `parent`: Print the parent of a path
//! - `inspect`: Show the root, name and extension of a path
//! - `equals`: Compare two paths
//! - `list`: List files or directories below a directory
//! - `show_layout`: Show the resolved storage layout
//! - `show_database_path`: Show where a database file is stored

pub mod equals;
pub mod inspect;
pub mod join;
pub mod list;
pub mod normalize;
pub mod parent;
pub mod show_database_path;
pub mod show_layout;

pub use equals::EqualsCommand;
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use list::ListCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use show_database_path::ShowDatabasePathCommand;
pub use show_layout::ShowLayoutCommand;
