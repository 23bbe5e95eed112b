//! Project initialization.
//!
//! This module writes a fresh `devstack/config.toml` into a project root.
//! An existing non-empty project file is never modified, so running init
//! twice is harmless.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::loader::{ConfigLoader, CONFIG_DIR};
use crate::config::template;
use crate::error::{Error, Result};
use crate::project::sanitize_project_id;

/// Result of initialization operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitResult {
    /// Path of the project file.
    pub config_path: PathBuf,
    /// Whether the `devstack/` directory was created.
    pub config_dir_created: bool,
    /// Whether the template was written. False when a non-empty project
    /// file was already present.
    pub created: bool,
    /// The sanitized project id the template was rendered with.
    pub project_id: String,
}

/// Initializes the project at `root`.
///
/// An empty `project_id` is derived from the name of `root`. The id is
/// sanitized before use.
///
/// # Errors
///
/// Returns an error if:
/// - The id sanitizes to an empty string
/// - The `devstack/` directory cannot be created
/// - The project file cannot be opened or written
///
/// # Examples
///
/// ```
/// use devstack::operations::init_config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let result = init_config("My App", dir.path()).unwrap();
/// assert!(result.created);
/// assert_eq!(result.project_id, "My_App");
///
/// // A second run leaves the file alone
/// let again = init_config("other", dir.path()).unwrap();
/// assert!(!again.created);
/// ```
pub fn init_config(project_id: &str, root: &Path) -> Result<InitResult> {
    let raw_id = if project_id.is_empty() {
        directory_name(root)?
    } else {
        project_id.to_string()
    };

    let project_id = sanitize_project_id(&raw_id);
    if project_id.is_empty() {
        return Err(Error::Validation {
            field: "project_id".into(),
            message: format!("{raw_id:?} contains no characters usable in a project id"),
        });
    }

    // 1. Create the config directory if it doesn't exist
    let config_dir = root.join(CONFIG_DIR);
    let config_dir_created = !config_dir.exists();
    fs::create_dir_all(&config_dir).map_err(|source| Error::Io {
        path: config_dir.clone(),
        source,
    })?;

    // 2. Open without truncating; existing content is never touched
    let config_path = ConfigLoader::config_path(root);
    let io_error = |source| Error::Io {
        path: config_path.clone(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config_path)
        .map_err(io_error)?;

    // 3. Only an empty file receives the template
    let created = file.metadata().map_err(io_error)?.len() == 0;
    if created {
        file.write_all(template::render(&project_id).as_bytes())
            .map_err(io_error)?;
        log::info!("Created {}", config_path.display());
    } else {
        log::info!("{} already exists, leaving it unchanged", config_path.display());
    }

    Ok(InitResult {
        config_path,
        config_dir_created,
        created,
        project_id,
    })
}

/// Initializes the project at `root` with an id derived from its name.
///
/// # Errors
///
/// See [`init_config`].
pub fn write_config(root: &Path) -> Result<InitResult> {
    init_config("", root)
}

fn directory_name(root: &Path) -> Result<String> {
    let absolute = root.canonicalize().map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}
