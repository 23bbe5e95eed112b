//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary project root
//! - Command builder helpers for common patterns
//! - Project file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the developer's environment into a test run.
const AMBIENT_VARS: [&str; 13] = [
    "DEVSTACK_WORKDIR",
    "DEVSTACK_LOG_MODE",
    "DEVSTACK_DB_PASSWORD",
    "DEVSTACK_AUTH_JWT_SECRET",
    "DEVSTACK_AUTH_ANON_KEY",
    "DEVSTACK_AUTH_SERVICE_ROLE_KEY",
    "DEVSTACK_AUTH_SMS_TWILIO_AUTH_TOKEN",
    "DEVSTACK_AUTH_SMS_MESSAGEBIRD_ACCESS_KEY",
    "DEVSTACK_AUTH_SMS_TEXTLOCAL_API_KEY",
    "DEVSTACK_AUTH_SMS_VONAGE_API_KEY",
    "DEVSTACK_AUTH_SMS_VONAGE_API_SECRET",
    "DEVSTACK_ANALYTICS_API_KEY",
    "DEVSTACK_AUTH_EXTERNAL_APPLE_SECRET",
];

/// Test environment with an isolated project root.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A project root inside it (not created yet)
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the project root
    pub project_root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let project_root = temp_path.join("project");

        Self {
            temp_dir,
            temp_path,
            project_root,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The ambient `DEVSTACK_*` variables are removed so the developer's
    /// shell cannot influence the result.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("devstack").expect("Failed to find devstack binary");
        for var in AMBIENT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the project root pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--workdir").arg(&self.project_root);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the project file.
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join("devstack").join("config.toml")
    }

    /// Write the project file.
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.project_root.join("devstack"))
            .expect("Failed to create config directory");
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Write the project's `.env` file.
    pub fn write_secret_file(&self, content: &str) {
        std::fs::create_dir_all(&self.project_root).expect("Failed to create project root");
        std::fs::write(self.project_root.join(".env"), content).expect("Failed to write .env");
    }

    /// Run `devstack init` with the given project id.
    ///
    /// # Panics
    /// Panics if the init command fails.
    pub fn init(&self, project_id: &str) {
        self.command()
            .arg("init")
            .arg("--project-id")
            .arg(project_id)
            .assert()
            .success();
    }

    /// Run a command and return stdout, asserting success.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
