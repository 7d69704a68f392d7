//! Common test utilities for docsource integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Content directory used when no config is written
#[allow(dead_code)]
pub const CONTENT_DIR: &str = "content/blogs";

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the default content directory
    #[allow(dead_code)]
    pub fn create_content_dir(&self) -> PathBuf {
        let content_path = self.path.join(CONTENT_DIR);
        std::fs::create_dir_all(&content_path).expect("Failed to create content directory");
        content_path
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a document with a `title` into the default content directory
    #[allow(dead_code)]
    pub fn write_doc(&self, path: &str, title: &str, body: &str) {
        self.write_file(
            &format!("{}/{}", CONTENT_DIR, path),
            &format!("---\ntitle: {}\n---\n{}", title, body),
        );
    }

    /// Write a meta file into the default content directory
    #[allow(dead_code)]
    pub fn write_meta(&self, path: &str, content: &str) {
        self.write_file(&format!("{}/{}", CONTENT_DIR, path), content);
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The docsource binary with workspace-related environment cleared
#[allow(deprecated)]
pub fn docsource_cmd() -> Command {
    let mut cmd = Command::cargo_bin("docsource").unwrap();
    cmd.env_remove("DOCSOURCE_WORKSPACE")
        .env_remove("DOCSOURCE_CONTENT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// The docsource binary running inside `workspace`
#[allow(dead_code)]
pub fn docsource_cmd_for_workspace(workspace: &Path) -> Command {
    let mut cmd = docsource_cmd();
    cmd.current_dir(workspace);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_write_doc() {
        let workspace = TestWorkspace::new();
        workspace.write_doc("guides/setup.md", "Setup", "Body\n");
        assert!(workspace.file_exists("content/blogs/guides/setup.md"));
        assert_eq!(
            workspace.read_file("content/blogs/guides/setup.md"),
            "---\ntitle: Setup\n---\nBody\n"
        );
    }
}
