//! Root detection.
//!
//! A root is the fixed, non-traversable prefix of an absolute path. Two
//! families are recognized regardless of the host platform:
//!
//! - a Windows drive root: one ASCII letter followed by `:` (`C:`)
//! - a Unix root: a single leading `/`
//!
//! The root family decides the canonical separator, whether equality is
//! case-sensitive, and where `..` traversal stops.

use std::fmt;

/// Separator used by Windows drive-rooted paths.
pub const WINDOWS_SEPARATOR: char = '\\';

/// Separator used by Unix-rooted paths.
pub const UNIX_SEPARATOR: char = '/';

/// Both separator characters accepted on input.
pub const SEPARATORS: [char; 2] = [WINDOWS_SEPARATOR, UNIX_SEPARATOR];

/// The root of an absolute path.
///
/// # Examples
///
/// ```
/// use rootpath::path::Root;
///
/// assert_eq!(Root::detect("C:\\Windows"), Some(Root::WindowsDrive('C')));
/// assert_eq!(Root::detect("/usr/lib"), Some(Root::Unix));
/// assert_eq!(Root::detect("relative"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    /// A drive letter root such as `C:`. The letter keeps its input case.
    WindowsDrive(char),
    /// The single `/` root.
    Unix,
}

impl Root {
    /// Detect the root at the start of `path`, if any.
    ///
    /// A leading `/` always wins; otherwise the first two characters must
    /// be an ASCII letter and `:`.
    #[must_use]
    pub fn detect(path: &str) -> Option<Self> {
        let mut chars = path.chars();
        match (chars.next(), chars.next()) {
            (Some(UNIX_SEPARATOR), _) => Some(Self::Unix),
            (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
                Some(Self::WindowsDrive(letter))
            }
            _ => None,
        }
    }

    /// Number of bytes the root occupies at the start of a path.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::WindowsDrive(_) => 2,
            Self::Unix => 1,
        }
    }

    /// Roots are never empty; provided for clippy's `len_without_is_empty`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// The canonical separator for paths with this root.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::WindowsDrive(_) => WINDOWS_SEPARATOR,
            Self::Unix => UNIX_SEPARATOR,
        }
    }

    /// Whether paths with this root compare case-insensitively.
    #[must_use]
    pub const fn is_case_insensitive(self) -> bool {
        matches!(self, Self::WindowsDrive(_))
    }

    /// Short family name used in messages.
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            Self::WindowsDrive(_) => "windows",
            Self::Unix => "unix",
        }
    }

    /// The canonical string for a path consisting of only this root.
    ///
    /// Drive roots keep a trailing separator (`C:\`); the Unix root is `/`.
    #[must_use]
    pub fn bare(self) -> String {
        match self {
            Self::WindowsDrive(letter) => format!("{letter}:{WINDOWS_SEPARATOR}"),
            Self::Unix => UNIX_SEPARATOR.to_string(),
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowsDrive(letter) => write!(f, "{letter}:"),
            Self::Unix => write!(f, "{UNIX_SEPARATOR}"),
        }
    }
}

/// Check whether `path` starts with a recognized root.
///
/// # Examples
///
/// ```
/// use rootpath::path::root::has_path_root;
///
/// assert!(has_path_root("/etc"));
/// assert!(has_path_root("d:relative-to-drive"));
/// assert!(!has_path_root(""));
/// assert!(!has_path_root("\\\\server\\share"));
/// ```
#[must_use]
pub fn has_path_root(path: &str) -> bool {
    Root::detect(path).is_some()
}

/// Check whether `path` is exactly a drive root such as `C:`.
#[must_use]
pub fn is_windows_root(path: &str) -> bool {
    path.len() == 2 && matches!(Root::detect(path), Some(Root::WindowsDrive(_)))
}

/// Check whether `path` is exactly the Unix root `/`.
#[must_use]
pub fn is_unix_root(path: &str) -> bool {
    path.len() == 1 && path.starts_with(UNIX_SEPARATOR)
}
