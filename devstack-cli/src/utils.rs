//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including project root resolution and configuration loading.

use crate::error::CliError;
use devstack::Config;
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Project root to operate on instead of the current directory.
    pub workdir: Option<PathBuf>,
}

/// Resolve the project root, using CWD if `--workdir` is not given.
///
/// Relative workdirs are taken relative to the current directory. The path is
/// not canonicalized, so it may not exist yet.
pub fn project_root(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.workdir {
        Some(dir) if dir.is_absolute() => Ok(dir.clone()),
        Some(dir) => Ok(env::current_dir()?.join(dir)),
        None => Ok(env::current_dir()?),
    }
}

/// Load and validate the configuration of the project root.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let root = project_root(global)?;
    log::debug!("Loading configuration from {}", root.display());
    Config::load(&root).map_err(CliError::from)
}
