//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! rootpath library.

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rootpath::AbsolutePath;
use tempfile::TempDir;

/// Every environment variable the library reads.
pub const ROOTPATH_ENV_VARS: [&str; 6] = [
    "ROOTPATH_ROOT_DIR",
    "ROOTPATH_DATABASE_DIR",
    "ROOTPATH_DATABASE_FILE",
    "ROOTPATH_READ_ONLY",
    "ROOTPATH_BUSY_TIMEOUT_MS",
    "ROOTPATH_LOG_MODE",
];

/// Creates a temporary directory and its absolute path value.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_root() -> (TempDir, AbsolutePath) {
    let dir = tempfile::tempdir().unwrap();
    let root = AbsolutePath::from_path(dir.path()).unwrap();
    (dir, root)
}

/// Creates every file in `files` (relative, `/`-separated) under `root`.
pub fn build_tree(root: &AbsolutePath, files: &[&str]) {
    for file in files {
        root.join(file).unwrap().touch_file(None, true).unwrap();
    }
}

/// Writes a configuration file and returns its path.
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Names of the given paths, in order.
pub fn names(paths: &[AbsolutePath]) -> Vec<String> {
    paths.iter().map(|p| p.name().to_string()).collect()
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use the `#[serial]` attribute.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears all `ROOTPATH_*` variables until the guards are dropped.
pub fn clear_rootpath_env_vars() -> Vec<EnvGuard> {
    ROOTPATH_ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}
