//! Project file loading.
//!
//! This module reads `devstack/config.toml` from a project root and runs the
//! layered pipeline: built-in defaults, then the project file, then secrets
//! from the environment, then validation.

use crate::config::environment::Environment;
use crate::config::merger::ConfigMerger;
use crate::config::model::Config;
use crate::config::schema::ConfigDocument;
use crate::config::template;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the project file, relative to the project root.
pub const CONFIG_DIR: &str = "devstack";

/// Name of the project file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Loads the configuration of a project.
///
/// # Examples
///
/// ```no_run
/// use devstack::config::{ConfigLoader, Environment};
/// use std::path::Path;
///
/// let root = Path::new(".");
/// let env = Environment::load(root).unwrap();
/// let config = ConfigLoader::load_with(root, &env).unwrap();
/// println!("Project {} uses {}", config.project_id, config.db.image);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the project file for `root`.
    #[must_use]
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load the project at `root` against the process environment and the
    /// project's `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret file is malformed, the project file is
    /// missing or invalid, or validation fails.
    pub fn load(root: &Path) -> Result<Config> {
        let env = Environment::load(root)?;
        Self::load_with(root, &env)
    }

    /// Load the project at `root` against an explicit environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] or [`Error::ConfigParse`] when the
    /// project file cannot be used, or the first validation error.
    pub fn load_with(root: &Path, env: &Environment) -> Result<Config> {
        let mut document = Self::load_document(root)?;
        env.apply_overrides(&mut document);
        let config = ConfigValidator::validate(document, env)?;
        log::info!("Loaded configuration for project {}", config.project_id);
        Ok(config)
    }

    /// Merge the project file over the built-in defaults and decode it,
    /// without environment overrides or validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] or [`Error::ConfigParse`] when the
    /// project file cannot be read or decoded.
    pub fn load_document(root: &Path) -> Result<ConfigDocument> {
        let path = Self::config_path(root);
        log::debug!("Reading project file {}", path.display());

        let contents = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            dir: root.to_path_buf(),
            path: path.clone(),
            source,
        })?;

        let parse_error = |source| Error::ConfigParse {
            dir: root.to_path_buf(),
            path: path.clone(),
            source,
        };

        let user: toml::Table = toml::from_str(&contents).map_err(parse_error)?;
        let mut merged = template::baseline()?;
        ConfigMerger::merge_into(&mut merged, user);

        toml::Value::Table(merged).try_into().map_err(parse_error)
    }
}

impl Config {
    /// Load and validate the configuration of the project at `root`.
    ///
    /// Shorthand for [`ConfigLoader::load`].
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::load`].
    pub fn load(root: &Path) -> Result<Self> {
        ConfigLoader::load(root)
    }
}
