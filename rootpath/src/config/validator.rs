//! Configuration validation.
//!
//! This module validates configuration fields before they are used to build
//! a storage layout or open a database.

use crate::config::schema::{Config, DatabaseSettings};
use crate::error::{Error, Result};
use crate::path::normalize::normalize_relative;
use crate::path::root::{has_path_root, SEPARATORS};

/// Longest accepted database file name, in characters.
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config {
///     root_directory: Some("relative/root".to_string()),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.root_directory {
            if !has_path_root(root) {
                return Err(Error::Validation {
                    field: "root_directory".into(),
                    message: format!("Must be an absolute path, got '{root}'"),
                });
            }
        }

        if let Some(ref directory) = config.database_directory {
            Self::validate_relative_directory("database_directory", directory)?;
        }

        if let Some(ref database) = config.database {
            Self::validate_database(database)?;
        }

        Ok(())
    }

    /// Validate database connection settings.
    fn validate_database(settings: &DatabaseSettings) -> Result<()> {
        if let Some(ref file_name) = settings.file_name {
            Self::validate_file_name("database.file_name", file_name)?;
        }

        if settings.busy_timeout_ms == Some(0) {
            return Err(Error::Validation {
                field: "database.busy_timeout_ms".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }

    /// Validate a file name used as a single path segment.
    ///
    /// Checks that the name is non-empty after trimming, contains no
    /// separators or null bytes, does not start with a root (`c:db`), is not
    /// a dot segment, and is not longer than 255 characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for `field` when a check fails.
    pub fn validate_file_name(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.contains(SEPARATORS)
            || has_path_root(trimmed)
            || trimmed == "."
            || trimmed == ".."
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be a single file name, got '{value}'"),
            });
        }

        if trimmed.chars().count() > MAX_FILE_NAME_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_FILE_NAME_LEN} characters"),
            });
        }

        Ok(())
    }

    /// Validate a directory that must stay below the storage root.
    ///
    /// The value must be rootless, non-empty after normalization, and must
    /// not climb out of the root with leading `..` segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for `field` when a check fails.
    pub fn validate_relative_directory(field: &str, value: &str) -> Result<()> {
        if has_path_root(value) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be relative to the root directory, got '{value}'"),
            });
        }

        let normalized = normalize_relative(value, None).map_err(|e| Error::Validation {
            field: field.into(),
            message: e.to_string(),
        })?;

        if normalized.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if normalized.split(SEPARATORS).next() == Some("..") {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot escape the root directory: '{value}'"),
            });
        }

        Ok(())
    }
}
