//! Path normalization and combination.
//!
//! This module provides the string-level algorithms behind
//! [`AbsolutePath`](super::AbsolutePath):
//! - Resolving `.` and `..` segments against a root
//! - Collapsing duplicate separators
//! - Rewriting separators to the canonical one for the root family
//! - Combining a base path with a relative suffix
//!
//! No function here touches the filesystem.

use super::root::{has_path_root, is_unix_root, is_windows_root, Root, SEPARATORS};
use crate::error::{Error, Result};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Normalize a rooted path to its canonical form.
///
/// The portion after the root is split on both `/` and `\`, empty segments
/// are dropped, `.` is removed and `..` cancels the preceding segment. The
/// result is rejoined with the separator of the root family. A bare root
/// normalizes to `C:\` or `/`.
///
/// `separator` may be given explicitly but must agree with the root family.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty or has no root ([`Error::NotRooted`])
/// - The separator does not match the root ([`Error::InvalidSeparator`])
/// - A `..` segment would climb above the root ([`Error::TraversalAboveRoot`])
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::normalize_path;
///
/// assert_eq!(normalize_path("/a/./b/../c", None).unwrap(), "/a/c");
/// assert_eq!(normalize_path("C:/a//b/", None).unwrap(), "C:\\a\\b");
/// assert_eq!(normalize_path("C:", None).unwrap(), "C:\\");
/// assert!(normalize_path("/../a", None).is_err());
/// ```
pub fn normalize_path(path: &str, separator: Option<char>) -> Result<String> {
    let root = Root::detect(path).ok_or_else(|| Error::NotRooted {
        path: path.to_string(),
    })?;
    let separator = choose_separator(Some(root), separator)?;

    let segments = resolve_segments(path, &path[root.len()..], true)?;
    if segments.is_empty() {
        return Ok(root.bare());
    }

    let mut normalized = root.bare();
    normalized.push_str(&segments.join(&separator.to_string()));
    Ok(normalized)
}

/// Normalize a rootless path.
///
/// Works like [`normalize_path`], except that a leading run of `..`
/// segments has nothing to resolve against and is kept as-is. Rooted input
/// is forwarded to [`normalize_path`]. Without an explicit separator the
/// host separator is used.
///
/// # Errors
///
/// Returns an error if the separator is not `/` or `\`, or for rooted input
/// under the conditions of [`normalize_path`].
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::normalize_relative;
///
/// assert_eq!(normalize_relative("a/./b/../c", Some('/')).unwrap(), "a/c");
/// assert_eq!(normalize_relative("../../x/..", Some('/')).unwrap(), "../..");
/// assert_eq!(normalize_relative("a/..", Some('/')).unwrap(), "");
/// ```
pub fn normalize_relative(path: &str, separator: Option<char>) -> Result<String> {
    if has_path_root(path) {
        return normalize_path(path, separator);
    }
    let separator = choose_separator(None, separator)?;
    let segments = resolve_segments(path, path, false)?;
    Ok(segments.join(&separator.to_string()))
}

/// Combine a base path with a relative suffix.
///
/// Trailing separators are trimmed from the base (the Unix root `/` is
/// kept), leading and trailing separators from the suffix, and exactly one
/// separator is inserted between them. A drive root base always gets a
/// backslash: `C:` + `foo` gives `C:\foo`. An empty base yields the trimmed
/// suffix.
///
/// The result is not normalized; `..` and `.` in the suffix survive until
/// the caller runs [`normalize_path`].
///
/// # Errors
///
/// Returns an error if:
/// - The suffix is rooted ([`Error::SuffixRooted`])
/// - The suffix is empty or only separators ([`Error::EmptySuffix`])
/// - The separator does not match the base root ([`Error::InvalidSeparator`])
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::combine;
///
/// assert_eq!(combine("C:", "foo", None).unwrap(), "C:\\foo");
/// assert_eq!(combine("/", "foo/", None).unwrap(), "/foo");
/// assert_eq!(combine("/a/b/", "\\c", None).unwrap(), "/a/b/c");
/// assert!(combine("/a", "/abs", None).is_err());
/// assert!(combine("/a", "", None).is_err());
/// ```
pub fn combine(base: &str, suffix: &str, separator: Option<char>) -> Result<String> {
    if has_path_root(suffix) {
        return Err(Error::SuffixRooted {
            suffix: suffix.to_string(),
        });
    }

    let suffix = suffix.trim_matches(SEPARATORS);
    if suffix.is_empty() {
        return Err(Error::EmptySuffix);
    }

    let base = trim_base(base);
    if base.is_empty() {
        return Ok(suffix.to_string());
    }

    let root = Root::detect(base);
    let separator = choose_separator(root, separator)?;

    if is_windows_root(base) {
        Ok(format!("{base}{separator}{suffix}"))
    } else if is_unix_root(base) {
        Ok(format!("{base}{suffix}"))
    } else {
        Ok(format!("{base}{separator}{suffix}"))
    }
}

/// Return the base path with its trailing separators normalized.
///
/// This is the explicit form of "combine with nothing": trailing
/// separators are removed, except that a drive root keeps exactly one
/// backslash and the Unix root stays `/`.
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::normalize_base;
///
/// assert_eq!(normalize_base("C:"), "C:\\");
/// assert_eq!(normalize_base("C:\\\\"), "C:\\");
/// assert_eq!(normalize_base("/a/b//"), "/a/b");
/// assert_eq!(normalize_base("/"), "/");
/// ```
#[must_use]
pub fn normalize_base(base: &str) -> String {
    let trimmed = trim_base(base);
    match Root::detect(trimmed) {
        Some(root @ Root::WindowsDrive(_)) if is_windows_root(trimmed) => root.bare(),
        _ => trimmed.to_string(),
    }
}

/// Scan the segments of `tail`, resolving `.` and `..`.
///
/// A `..` that only has other `..` segments before it cannot be resolved:
/// for rooted input this is a traversal above the root, for rootless input
/// the segment is kept.
fn resolve_segments<'a>(original: &str, tail: &'a str, rooted: bool) -> Result<Vec<&'a str>> {
    let mut resolved: Vec<&str> = Vec::new();

    for segment in tail.split(SEPARATORS).filter(|s| !s.is_empty()) {
        match segment {
            CURRENT_DIR => {}
            PARENT_DIR => {
                if resolved.last().map_or(true, |last| *last == PARENT_DIR) {
                    if rooted {
                        return Err(Error::TraversalAboveRoot {
                            path: original.to_string(),
                        });
                    }
                    resolved.push(segment);
                } else {
                    resolved.pop();
                }
            }
            _ => resolved.push(segment),
        }
    }

    Ok(resolved)
}

/// Pick the separator for output, checking an explicit choice against the root.
fn choose_separator(root: Option<Root>, explicit: Option<char>) -> Result<char> {
    match (root, explicit) {
        (Some(root), Some(separator)) if separator != root.separator() => {
            Err(Error::InvalidSeparator {
                separator,
                root: root.family(),
            })
        }
        (Some(root), _) => Ok(root.separator()),
        (None, Some(separator)) if !SEPARATORS.contains(&separator) => {
            Err(Error::InvalidSeparator {
                separator,
                root: "relative",
            })
        }
        (None, Some(separator)) => Ok(separator),
        (None, None) => Ok(std::path::MAIN_SEPARATOR),
    }
}

/// Strip trailing separators, never reducing a Unix-rooted base below `/`.
fn trim_base(base: &str) -> &str {
    let trimmed = base.trim_end_matches(SEPARATORS);
    if trimmed.is_empty() && base.starts_with('/') {
        &base[..1]
    } else {
        trimmed
    }
}
