//! Filesystem helpers layered on top of [`AbsolutePath`].
//!
//! These are thin pass-throughs to `std::fs`. They are not part of the
//! normalization contract: the path value stays pure and these helpers are
//! the only place where I/O happens.
//!
//! A drive-rooted value such as `C:\data` has no meaning on a Unix host;
//! handing it to `std::fs` would resolve it relative to the working
//! directory. On non-Windows hosts the helpers therefore treat drive-rooted
//! paths as absent and fail with [`Error::ForeignRoot`] for any operation
//! that reads or writes. On Windows, `/`-rooted paths resolve against the
//! current drive, as the platform does.

use std::fs::{self, Metadata, OpenOptions};
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use super::{AbsolutePath, Root};
use crate::error::{Error, Result};

/// Whether an existence check targets a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file (or a symlink to one).
    File,
    /// A directory (or a symlink to one).
    Directory,
}

/// How far a containment check descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchDepth {
    /// Only the immediate children of the directory.
    #[default]
    TopDirectoryOnly,
    /// The directory and all of its descendants.
    AllDirectories,
}

impl AbsolutePath {
    /// Whether a regular file exists at this path.
    #[must_use]
    pub fn file_exists(&self) -> bool {
        self.host_path().is_ok_and(Path::is_file)
    }

    /// Whether a directory exists at this path.
    #[must_use]
    pub fn directory_exists(&self) -> bool {
        self.host_path().is_ok_and(Path::is_dir)
    }

    /// Whether an entry of the given kind exists at this path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rootpath::AbsolutePath;
    /// use rootpath::path::EntryKind;
    ///
    /// let tmp = AbsolutePath::new("/tmp").unwrap();
    /// assert!(tmp.exists(EntryKind::Directory));
    /// ```
    #[must_use]
    pub fn exists(&self, kind: EntryKind) -> bool {
        match kind {
            EntryKind::File => self.file_exists(),
            EntryKind::Directory => self.directory_exists(),
        }
    }

    /// This path, if an entry of the given kind exists.
    #[must_use]
    pub fn existing(&self, kind: EntryKind) -> Option<&Self> {
        self.exists(kind).then_some(self)
    }

    /// This path, if it is an existing file.
    #[must_use]
    pub fn existing_file(&self) -> Option<&Self> {
        self.existing(EntryKind::File)
    }

    /// This path, if it is an existing directory.
    #[must_use]
    pub fn existing_directory(&self) -> Option<&Self> {
        self.existing(EntryKind::Directory)
    }

    /// Query filesystem metadata for this path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be accessed.
    pub fn metadata(&self) -> Result<Metadata> {
        Ok(fs::metadata(self.host_path()?)?)
    }

    /// Whether this directory contains a file whose name matches `pattern`.
    ///
    /// `*` matches any run of characters and `?` matches one character.
    /// Returns `false` when the directory does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing directory cannot be read.
    pub fn contains_file(&self, pattern: &str, depth: SearchDepth) -> Result<bool> {
        self.contains_entry(pattern, EntryKind::File, depth)
    }

    /// Whether this directory contains a directory whose name matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing directory cannot be read.
    pub fn contains_directory(&self, pattern: &str, depth: SearchDepth) -> Result<bool> {
        self.contains_entry(pattern, EntryKind::Directory, depth)
    }

    fn contains_entry(&self, pattern: &str, kind: EntryKind, depth: SearchDepth) -> Result<bool> {
        if !self.directory_exists() {
            return Ok(false);
        }
        if !self.children(pattern, kind)?.is_empty() {
            return Ok(true);
        }
        if depth == SearchDepth::AllDirectories {
            for directory in self.children("*", EntryKind::Directory)? {
                if directory.contains_entry(pattern, kind, depth)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Files matching `pattern` up to `depth` directory levels down.
    ///
    /// Depth 1 lists the files directly inside this directory; each extra
    /// level adds the files of the next layer of subdirectories. Depth 0
    /// yields nothing. Results are sorted per directory level.
    ///
    /// # Errors
    ///
    /// Returns an error if this path or a visited subdirectory cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rootpath::AbsolutePath;
    ///
    /// let logs = AbsolutePath::new("/var/log").unwrap();
    /// for file in logs.files("*.log", 2).unwrap() {
    ///     println!("{file}");
    /// }
    /// ```
    pub fn files(&self, pattern: &str, depth: usize) -> Result<Vec<Self>> {
        if depth == 0 {
            return Ok(Vec::new());
        }

        let mut files = self.children(pattern, EntryKind::File)?;
        for directory in self.directories("*", depth - 1)? {
            files.extend(directory.children(pattern, EntryKind::File)?);
        }
        Ok(files)
    }

    /// Directories matching `pattern` up to `depth` levels down.
    ///
    /// The walk is breadth-first: all matches of one level come before the
    /// next level, sorted within the level. Non-matching directories are
    /// still descended into.
    ///
    /// # Errors
    ///
    /// Returns an error if this path or a visited subdirectory cannot be read.
    pub fn directories(&self, pattern: &str, depth: usize) -> Result<Vec<Self>> {
        let mut matches = Vec::new();
        let mut level = vec![self.clone()];
        let mut remaining = depth;

        while !level.is_empty() && remaining > 0 {
            let mut level_matches = Vec::new();
            let mut next_level = Vec::new();
            for directory in &level {
                level_matches.extend(directory.children(pattern, EntryKind::Directory)?);
                next_level.extend(directory.children("*", EntryKind::Directory)?);
            }
            level_matches.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            matches.extend(level_matches);

            remaining -= 1;
            level = next_level;
        }

        Ok(matches)
    }

    /// Immediate children of the given kind whose names match `pattern`.
    fn children(&self, pattern: &str, kind: EntryKind) -> Result<Vec<Self>> {
        let host = self.host_path()?;
        if !host.is_dir() {
            return Err(Error::NotADirectory {
                path: self.as_path().to_path_buf(),
            });
        }

        let mut children = Vec::new();
        for entry in fs::read_dir(host)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                log::debug!("Skipping non-UTF8 entry in {self}: {file_name:?}");
                continue;
            };
            if !wildcard_match(pattern, name) {
                continue;
            }

            let Some(child) = self.child(name) else {
                log::debug!("Skipping entry in {self} that is not a single segment: {name:?}");
                continue;
            };
            if child.exists(kind) {
                children.push(child);
            }
        }

        children.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(children)
    }

    /// Create this directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_directory(&self) -> Result<&Self> {
        log::debug!("Creating directory {self}");
        fs::create_dir_all(self.host_path()?)?;
        Ok(self)
    }

    /// Delete this directory if present, then create it empty.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion or creation fails.
    pub fn create_or_clean_directory(&self) -> Result<&Self> {
        self.delete_directory()?;
        self.create_directory()
    }

    /// Create the file if missing and set its modification time.
    ///
    /// Like the Unix `touch` command. `time` defaults to now; with
    /// `create_directories` the parent directory is created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent cannot be created, or the
    /// modification time cannot be set.
    pub fn touch_file(
        &self,
        time: Option<DateTime<Local>>,
        create_directories: bool,
    ) -> Result<&Self> {
        if create_directories {
            if let Some(parent) = self.parent() {
                parent.create_directory()?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.host_path()?)?;
        let modified: SystemTime = time.unwrap_or_else(Local::now).into();
        file.set_modified(modified)?;

        Ok(self)
    }

    /// Delete this file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn delete_file(&self) -> Result<()> {
        if !self.host_path()?.is_file() {
            return Ok(());
        }

        log::debug!("Deleting file {self}");
        clear_readonly(self)?;
        fs::remove_file(self.host_path()?)?;
        Ok(())
    }

    /// Recursively delete this directory if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be removed.
    pub fn delete_directory(&self) -> Result<()> {
        if !self.host_path()?.is_dir() {
            return Ok(());
        }

        log::debug!("Deleting directory {self}");
        if cfg!(windows) {
            for file in self.files("*", usize::MAX)? {
                clear_readonly(&file)?;
            }
        }
        fs::remove_dir_all(self.host_path()?)?;
        Ok(())
    }

    /// This path as a host path, if the host filesystem can resolve its root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignRoot`] for drive-rooted paths on non-Windows
    /// hosts.
    pub(crate) fn host_path(&self) -> Result<&Path> {
        if cfg!(not(windows)) && matches!(self.root(), Root::WindowsDrive(_)) {
            return Err(Error::ForeignRoot {
                path: self.as_str().to_string(),
            });
        }
        Ok(self.as_path())
    }
}

/// Keep only the paths that are existing files.
pub fn where_file_exists<I>(paths: I) -> impl Iterator<Item = AbsolutePath>
where
    I: IntoIterator<Item = AbsolutePath>,
{
    paths.into_iter().filter(AbsolutePath::file_exists)
}

/// Keep only the paths that are existing directories.
pub fn where_directory_exists<I>(paths: I) -> impl Iterator<Item = AbsolutePath>
where
    I: IntoIterator<Item = AbsolutePath>,
{
    paths.into_iter().filter(AbsolutePath::directory_exists)
}

/// Delete every file in `paths` that exists.
///
/// # Errors
///
/// Stops at and returns the first deletion failure.
pub fn delete_files<'a, I>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = &'a AbsolutePath>,
{
    paths.into_iter().try_for_each(AbsolutePath::delete_file)
}

/// Recursively delete every directory in `paths` that exists.
///
/// # Errors
///
/// Stops at and returns the first deletion failure.
pub fn delete_directories<'a, I>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = &'a AbsolutePath>,
{
    paths.into_iter().try_for_each(AbsolutePath::delete_directory)
}

/// Match a file name against a pattern with `*` and `?` wildcards.
///
/// # Examples
///
/// ```
/// use rootpath::path::fs::wildcard_match;
///
/// assert!(wildcard_match("*.db3", "store.db3"));
/// assert!(wildcard_match("log-??.txt", "log-01.txt"));
/// assert!(!wildcard_match("*.db3", "store.db"));
/// ```
#[must_use]
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position of the last `*` and the name index it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    n = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(windows)]
#[allow(clippy::permissions_set_readonly_false)]
fn clear_readonly(path: &AbsolutePath) -> Result<()> {
    let mut permissions = path.metadata()?.permissions();
    if permissions.readonly() {
        permissions.set_readonly(false);
        fs::set_permissions(path.host_path()?, permissions)?;
    }
    Ok(())
}

#[cfg(not(windows))]
#[allow(clippy::unnecessary_wraps)]
fn clear_readonly(_path: &AbsolutePath) -> Result<()> {
    // Unlinking on Unix depends on the parent directory, not the file mode.
    Ok(())
}
