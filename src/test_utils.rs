//! Test utilities for creating temporary directories of dotfiles.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// A temporary directory for listing tests.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given content.
    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a file of `size` bytes modified `secs` seconds after the epoch.
    pub fn add_file_at(&self, name: &str, size: usize, secs: u64) -> PathBuf {
        let full_path = self.add_file(name, &"x".repeat(size));
        self.set_mtime(name, secs);
        full_path
    }

    /// Set the modification time of an existing file.
    pub fn set_mtime(&self, name: &str, secs: u64) {
        let file = File::options()
            .write(true)
            .open(self.dir.path().join(name))
            .expect("Failed to open file");
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .expect("Failed to set mtime");
    }

    pub fn add_dir(&self, name: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink whose target does not exist.
    #[cfg(unix)]
    pub fn add_dangling_symlink(&self, name: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        std::os::unix::fs::symlink(self.dir.path().join("does-not-exist"), &full_path)
            .expect("Failed to create symlink");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
