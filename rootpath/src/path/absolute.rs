//! The absolute path value type.
//!
//! [`AbsolutePath`] wraps a canonical, rooted path string. It is immutable:
//! every operation that "changes" a path builds a new value through the
//! normalizer.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::{combine, normalize_path};
use super::root::{Root, SEPARATORS};
use crate::error::{Error, Result};

/// An absolute, normalized path that does not distinguish files from
/// directories.
///
/// The stored string always has a root (`C:` or `/`), never contains `.` or
/// resolvable `..` segments, never repeats a separator, and uses the
/// separator of its root family (`\` or `/`). Only drive roots keep a
/// trailing separator (`C:\`).
///
/// Equality follows the host filesystem conventions of the root family:
/// drive-rooted values compare case-insensitively, Unix-rooted values
/// case-sensitively. `Hash` agrees with `Eq`, so values can be used as map
/// keys.
///
/// # Examples
///
/// ```
/// use rootpath::AbsolutePath;
///
/// let base = AbsolutePath::new("/srv/data/").unwrap();
/// let file = base.join("db/./store.db3").unwrap();
/// assert_eq!(file.as_str(), "/srv/data/db/store.db3");
/// assert_eq!(file.name(), "store.db3");
/// assert_eq!(file.extension(), ".db3");
/// assert_eq!(file.parent().unwrap(), base.join("db").unwrap());
///
/// assert_eq!(
///     AbsolutePath::new("C:\\Foo").unwrap(),
///     AbsolutePath::new("c:/foo").unwrap()
/// );
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsolutePath {
    path: String,
}

impl AbsolutePath {
    /// Create a new absolute path by validating and normalizing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRooted`] if the input has no recognized root and
    /// [`Error::TraversalAboveRoot`] if `..` segments escape the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("/a/../b").unwrap();
    /// assert_eq!(path.as_str(), "/b");
    /// assert!(AbsolutePath::new("relative").is_err());
    /// ```
    pub fn new(path: impl AsRef<str>) -> Result<Self> {
        let path = normalize_path(path.as_ref(), None)?;
        Ok(Self { path })
    }

    /// Create an absolute path from a host path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the path is not valid UTF-8, or any
    /// error of [`AbsolutePath::new`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let path = path.to_str().ok_or_else(|| Error::Validation {
            field: "path".into(),
            message: format!("path contains invalid UTF-8: {}", path.display()),
        })?;
        Self::new(path)
    }

    /// Build the child path obtained by appending a relative `suffix`.
    ///
    /// The suffix may contain `.` and `..` segments and either separator;
    /// the combined path is normalized again.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The suffix is rooted ([`Error::SuffixRooted`])
    /// - The suffix is empty or only separators ([`Error::EmptySuffix`])
    /// - The suffix climbs above the root ([`Error::TraversalAboveRoot`])
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::AbsolutePath;
    ///
    /// let drive = AbsolutePath::new("C:").unwrap();
    /// assert_eq!(drive.join("foo").unwrap().as_str(), "C:\\foo");
    ///
    /// let base = AbsolutePath::new("/a/b").unwrap();
    /// assert_eq!(base.join("../c").unwrap().as_str(), "/a/c");
    /// assert!(base.join("/abs").is_err());
    /// ```
    pub fn join(&self, suffix: &str) -> Result<Self> {
        let combined = combine(&self.path, suffix, None)?;
        Self::new(combined)
    }

    /// Append a single directory entry name without re-parsing it.
    ///
    /// Returns `None` when `name` cannot be stored as one segment: it is
    /// empty, a dot segment, or contains a separator.
    pub(crate) fn child(&self, name: &str) -> Option<Self> {
        if name.is_empty() || name == "." || name == ".." || name.contains(SEPARATORS) {
            return None;
        }

        let mut path = self.path.clone();
        if !self.is_root() {
            path.push(self.root().separator());
        }
        path.push_str(name);
        Some(Self { path })
    }

    /// Join `suffix`, or return a copy of `self` when the suffix has nothing
    /// to append (empty or only separators).
    ///
    /// # Errors
    ///
    /// Same as [`AbsolutePath::join`], except for [`Error::EmptySuffix`].
    pub fn join_or_self(&self, suffix: &str) -> Result<Self> {
        if suffix.trim_matches(SEPARATORS).is_empty() && !suffix.starts_with('/') {
            return Ok(self.clone());
        }
        self.join(suffix)
    }

    /// The parent directory, or `None` when this path is its own root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("C:\\a").unwrap();
    /// let root = path.parent().unwrap();
    /// assert_eq!(root.as_str(), "C:\\");
    /// assert!(root.parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        self.join("..").ok()
    }

    /// Iterate over this path and all of its ancestors, ending at the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self.clone()), Self::parent)
    }

    /// The root of this path.
    #[must_use]
    pub fn root(&self) -> Root {
        // Construction guarantees a root.
        Root::detect(&self.path).unwrap_or(Root::Unix)
    }

    /// Whether this path consists of only its root (`C:\` or `/`).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.len() == self.root().bare().len()
    }

    /// The last segment of the path, or an empty string at a root.
    #[must_use]
    pub fn name(&self) -> &str {
        let tail = &self.path[self.root().len()..];
        tail.rsplit(SEPARATORS).next().unwrap_or_default()
    }

    /// The name without its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("/home/user/archive.tar.gz").unwrap();
    /// assert_eq!(path.name_without_extension(), "archive.tar");
    /// assert_eq!(path.extension(), ".gz");
    ///
    /// let dotfile = AbsolutePath::new("/home/user/.bashrc").unwrap();
    /// assert_eq!(dotfile.name_without_extension(), ".bashrc");
    /// assert_eq!(dotfile.extension(), "");
    /// ```
    #[must_use]
    pub fn name_without_extension(&self) -> &str {
        split_extension(self.name()).0
    }

    /// The extension of the name, including the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        split_extension(self.name()).1
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Borrow as a host path for use with `std::fs`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Convert into the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Case-folded form used for equality and hashing.
    ///
    /// Drive-rooted paths fold each character to its single-character
    /// uppercase mapping, like an ordinal case-insensitive comparison.
    /// Characters whose uppercase form expands (`ß`) are kept unchanged.
    fn comparison_key(&self) -> Cow<'_, str> {
        if self.root().is_case_insensitive() {
            Cow::Owned(self.path.chars().map(simple_uppercase).collect())
        } else {
            Cow::Borrowed(&self.path)
        }
    }
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

/// Split a file name on its last dot, ignoring a dot at position 0.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) if index > 0 => name.split_at(index),
        _ => (name, ""),
    }
}

impl PartialEq for AbsolutePath {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for AbsolutePath {}

impl Hash for AbsolutePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl fmt::Debug for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbsolutePath").field(&self.path).finish()
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for AbsolutePath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for AbsolutePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&Path> for AbsolutePath {
    type Error = Error;

    fn try_from(value: &Path) -> Result<Self> {
        Self::from_path(value)
    }
}

impl From<AbsolutePath> for String {
    fn from(value: AbsolutePath) -> Self {
        value.path
    }
}

impl From<AbsolutePath> for PathBuf {
    fn from(value: AbsolutePath) -> Self {
        PathBuf::from(value.path)
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
