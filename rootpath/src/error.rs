//! Error types for the rootpath library.
//!
//! This module provides the error hierarchy for all operations in the
//! rootpath library, using `thiserror` for ergonomic error handling.
//!
//! Path construction and combination failures are local, deterministic
//! input-validation errors. The remaining variants cover the thin
//! filesystem, configuration and database layers built on top of them.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a rootpath error.
///
/// # Examples
///
/// ```
/// use rootpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/var/lib".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rootpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input has no recognized root (`X:` drive or leading `/`).
    #[error("path '{path}' must be rooted")]
    NotRooted {
        /// The rejected input.
        path: String,
    },

    /// Resolving `..` segments would climb above the root.
    #[error("cannot normalize '{path}' beyond path root")]
    TraversalAboveRoot {
        /// The input being normalized.
        path: String,
    },

    /// A rooted suffix was given to a join.
    #[error("cannot append rooted path '{suffix}'")]
    SuffixRooted {
        /// The rejected suffix.
        suffix: String,
    },

    /// A join was given nothing to append.
    #[error("suffix must not be empty")]
    EmptySuffix,

    /// An explicit separator does not match the root family of the path.
    #[error("separator '{separator}' is not valid for {root}-rooted paths")]
    InvalidSeparator {
        /// The requested separator.
        separator: char,
        /// The root family of the path (`windows` or `unix`).
        root: &'static str,
    },

    /// A directory operation was attempted on something that is not one.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A path whose root cannot be resolved by the host filesystem, such as
    /// a drive-rooted path on a Unix host.
    #[error("path '{path}' is not rooted on this host")]
    ForeignRoot {
        /// The offending path.
        path: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error came from path construction or combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::Error;
    ///
    /// assert!(Error::EmptySuffix.is_path_error());
    /// assert!(!Error::Validation {
    ///     field: "file_name".into(),
    ///     message: "empty".into(),
    /// }
    /// .is_path_error());
    /// ```
    #[must_use]
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            Self::NotRooted { .. }
                | Self::TraversalAboveRoot { .. }
                | Self::SuffixRooted { .. }
                | Self::EmptySuffix
                | Self::InvalidSeparator { .. }
        )
    }

    /// Check if the error indicates a missing file or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
