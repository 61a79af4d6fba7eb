//! Common test utilities for version-stamp integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Version the binary under test stamps
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A scratch working directory for running the binary
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

    /// Create a workspace holding `config.yml` with the given content
    pub fn with_config(content: &str) -> Self {
        let workspace = Self::new();
        workspace.write_file("config.yml", content);
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse a YAML file from workspace
    #[allow(dead_code)]
    pub fn read_yaml(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Failed to parse YAML")
    }

    /// The `name` field of a YAML file in workspace
    #[allow(dead_code)]
    pub fn name_in(&self, path: &str) -> String {
        self.read_yaml(path)["name"]
            .as_str()
            .expect("name is not a string")
            .to_string()
    }

    /// Command running the real binary inside this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = stamp_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn stamp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("version-stamp").expect("binary is built");
    cmd.env_remove("VERSION_STAMP_CONFIG");
    cmd
}
