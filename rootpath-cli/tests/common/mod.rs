//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated storage root

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated storage root.
///
/// Commands built from it never read the real user configuration or the
/// caller's `ROOTPATH_*` environment.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Storage root passed with --root-dir
    pub root_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The storage root path is not created; commands that need it create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let root_dir = temp_path.join("rootpath-data");

        Self {
            temp_dir,
            temp_path,
            root_dir,
        }
    }

    /// Get a bare command builder with a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("rootpath").expect("Failed to find rootpath binary");
        for var in [
            "ROOTPATH_ROOT_DIR",
            "ROOTPATH_DATABASE_DIR",
            "ROOTPATH_DATABASE_FILE",
            "ROOTPATH_READ_ONLY",
            "ROOTPATH_BUSY_TIMEOUT_MS",
            "ROOTPATH_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with --root-dir set to this environment's root.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root-dir").arg(&self.root_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parent directories) in the test environment.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, b"").expect("Failed to create test file");
        path
    }

    /// Write `config.yaml` into the storage root.
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.root_dir).expect("Failed to create root directory");
        std::fs::write(self.root_dir.join("config.yaml"), content)
            .expect("Failed to write config");
    }
}
