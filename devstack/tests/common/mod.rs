//! Common test utilities for integration tests.
//!
//! This module provides a project fixture builder and an environment guard
//! for testing the devstack library.

use std::env;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Every variable the loader reads as an override.
#[allow(dead_code)]
pub const OVERRIDE_VARS: [&str; 10] = [
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
];

/// Builder for a temporary project root.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .with_config("project_id = \"shop\"")
///     .with_secret_file("DEVSTACK_DB_PASSWORD=pw\n")
///     .build();
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct ProjectFixture {
    config: Option<String>,
    secret_file: Option<String>,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates a builder for an empty project root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content of `devstack/config.toml`.
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Sets the content of `.env`.
    pub fn with_secret_file(mut self, content: &str) -> Self {
        self.secret_file = Some(content.to_string());
        self
    }

    /// Writes the project into a fresh temporary directory.
    pub fn build(self) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        if let Some(config) = self.config {
            write_config(dir.path(), &config);
        }
        if let Some(secrets) = self.secret_file {
            fs::write(dir.path().join(".env"), secrets).unwrap();
        }
        dir
    }
}

/// Writes `content` as the project file under `root`.
#[allow(dead_code)]
pub fn write_config(root: &Path, content: &str) {
    fs::create_dir_all(root.join("devstack")).unwrap();
    fs::write(root.join("devstack").join("config.toml"), content).unwrap();
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use #[serial] attribute or ensure tests clean up properly.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
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

/// Clears every override variable for the lifetime of the returned guards.
#[allow(dead_code)]
pub fn clear_override_vars() -> Vec<EnvGuard> {
    OVERRIDE_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}
