//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment per test: a temporary
//! working directory (so no project `locus.yaml` leaks in) and a separate
//! data directory for the user config.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small site used across tests.
#[allow(dead_code)]
pub const SITE: &str = r#"
children:
  docs:
    children:
      guide:
        value: "Read me"
  about:
    value: "About us"
"#;

/// Test environment with isolated working and data directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Directory passed as `--data-dir`
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("locus-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command running inside the environment with `LOCUS_*` cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("locus").expect("Failed to find locus binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("LOCUS_TREE")
            .env_remove("LOCUS_FIXUP")
            .env_remove("LOCUS_OUTPUT_FORMAT")
            .env_remove("LOCUS_LOG_MODE")
            .arg("--data-dir")
            .arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to `name` inside the environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the standard site tree and return its path.
    pub fn site(&self) -> PathBuf {
        self.write_file("site.yaml", SITE)
    }
}
