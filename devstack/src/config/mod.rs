//! Configuration system for devstack.
//!
//! A project is configured by `devstack/config.toml` in its root directory.
//! Loading produces one validated [`Config`] and runs these layers, later
//! ones winning:
//!
//! 1. Built-in defaults (the `devstack init` template)
//! 2. The project file, deep-merged over the defaults
//! 3. Secrets from the environment (`DEVSTACK_*`, process environment over
//!    the project's `.env` file)
//!
//! Validation then checks the merged result in a fixed order, fills in the
//! well-known local secrets, and derives the container identifiers and the
//! database image.
//!
//! # Examples
//!
//! Loading a project:
//!
//! ```no_run
//! use devstack::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("/path/to/project")).unwrap();
//! println!("Database image: {}", config.db.image);
//! ```
//!
//! Loading without touching the process environment:
//!
//! ```
//! use devstack::config::{ConfigLoader, Environment};
//! use devstack::operations::init_config;
//!
//! let dir = tempfile::tempdir().unwrap();
//! init_config("shop", dir.path()).unwrap();
//!
//! let env = Environment::from_vars([("DEVSTACK_DB_PASSWORD", "hunter2")]);
//! let config = ConfigLoader::load_with(dir.path(), &env).unwrap();
//!
//! assert_eq!(config.project_id.as_str(), "shop");
//! assert_eq!(config.db.password.expose(), "hunter2");
//! ```

pub mod environment;
pub mod loader;
pub mod merger;
pub mod model;
pub mod schema;
pub mod size;
pub mod template;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use environment::{resolve_env_reference, Environment, ProcessEnv, VarSource};
pub use loader::{ConfigLoader, CONFIG_DIR, CONFIG_FILE};
pub use merger::ConfigMerger;
pub use model::{
    AnalyticsBackend, AnalyticsConfig, AuthConfig, Config, DbConfig, ExternalProvider, Feature,
    FunctionConfig, MessagebirdCredentials, ProviderCredentials, Secret, SmsConfig,
    TextlocalCredentials, TwilioCredentials, VonageCredentials, EXTERNAL_PROVIDERS,
};
pub use schema::ConfigDocument;
pub use size::SizeInBytes;
pub use validator::ConfigValidator;
