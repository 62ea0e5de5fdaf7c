//! Absolute path values with root-aware normalization.
//!
//! This module provides the core path handling for rootpath: a value type
//! for absolute paths, the string-level normalizer behind it, and a thin
//! layer of filesystem helpers.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! Every [`AbsolutePath`] starts with a [`Root`]. Two families are
//! recognized on every host:
//! - Windows drive roots (`C:`), which use `\` and compare case-insensitively
//! - The Unix root (`/`), which uses `/` and compares case-sensitively
//!
//! ## Normalization
//!
//! Normalization converts a path string to its canonical form by:
//! - Accepting both `/` and `\` on input
//! - Collapsing repeated separators
//! - Removing `.` segments and resolving `..` against the preceding segment
//! - Rewriting separators to the one used by the root family
//!
//! Normalization is purely lexical. It never consults the filesystem, so
//! symlinks are not followed.
//!
//! # Examples
//!
//! ```
//! use rootpath::AbsolutePath;
//! use rootpath::path::Root;
//!
//! let home = AbsolutePath::new("/home//user/./projects/..").unwrap();
//! assert_eq!(home.as_str(), "/home/user");
//! assert_eq!(home.root(), Root::Unix);
//!
//! let drive = AbsolutePath::new("d:/Games").unwrap();
//! assert_eq!(drive.as_str(), "d:\\Games");
//! assert_eq!(drive, AbsolutePath::new("D:\\GAMES").unwrap());
//! ```

mod absolute;
pub mod fs;
pub mod normalize;
pub mod root;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use absolute::AbsolutePath;
pub use fs::{EntryKind, SearchDepth};
pub use root::Root;
