#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # devstack
//!
//! Layered project configuration for the devstack local development
//! platform.
//!
//! This library turns a project's `devstack/config.toml`, its `.env` file and
//! the process environment into one validated configuration, and derives
//! everything the orchestrator needs from it: container and network
//! identifiers, the database image and its initial schema.
//!
//! ## Core Types
//!
//! - [`Config`]: The resolved configuration, see [`Config::load`]
//! - [`ProjectId`] and [`sanitize_project_id`]: Project identifiers
//! - [`PostgresVersion`]: Supported database versions and their assets
//! - [`ServiceIds`]: Derived container identifiers
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use devstack::{init_config, Config};
//!
//! let dir = tempfile::tempdir().unwrap();
//! init_config("shop", dir.path()).unwrap();
//!
//! let config = Config::load(dir.path()).unwrap();
//! assert_eq!(config.services.kong, "devstack_kong_shop");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod postgres;
pub mod project;
pub mod services;

// Re-export key types at crate root for convenience
pub use config::{resolve_env_reference, Config, ConfigLoader, Environment, SizeInBytes};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{init_config, write_config, InitResult};
pub use postgres::PostgresVersion;
pub use project::{sanitize_project_id, ProjectId};
pub use services::ServiceIds;
