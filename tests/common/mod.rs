//! Shared testing utilities for cses integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated directory for document fixtures.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the fixture directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to a (possibly not yet existing) file inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write a fixture file and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Build a command for invoking the compiled `cses` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cses").expect("Failed to locate cses binary");
        cmd.current_dir(self.root());
        cmd
    }
}
