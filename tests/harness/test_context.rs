//! Shared testing harness for `docx2md` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::docx_fixture;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the default `docs/` directory.
    pub(crate) fn docs_dir(&self) -> PathBuf {
        self.work_dir.join("docs")
    }

    /// Resolve a path relative to the working directory.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Build a command for invoking the compiled `docx2md` binary in the working directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("docx2md").expect("Failed to locate docx2md binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a valid `.docx` with a heading and one paragraph at `relative`.
    pub(crate) fn add_docx(&self, relative: &str, title: &str) -> PathBuf {
        let path = self.path(relative);
        let xml = docx_fixture::heading_document(title, &[&format!("Body of {title}.")]);
        docx_fixture::write_docx(&path, &xml);
        path
    }

    /// Write an unreadable `.docx` at `relative`.
    pub(crate) fn add_corrupt_docx(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        docx_fixture::write_corrupt_docx(&path);
        path
    }

    /// Write an arbitrary file at `relative`.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Read a file relative to the working directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Assert that a file exists relative to the working directory.
    pub(crate) fn assert_exists(&self, relative: &str) {
        assert!(self.path(relative).exists(), "{relative} should exist");
    }

    /// Assert that a file does not exist relative to the working directory.
    pub(crate) fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{relative} should not exist");
    }

    /// Root of the temp directory (outside the working directory).
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }
}
