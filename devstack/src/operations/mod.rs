//! Project operations.
//!
//! Currently a single operation: initializing a project with a fresh
//! `devstack/config.toml`.
//!
//! # Examples
//!
//! ```
//! use devstack::operations::init_config;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let result = init_config("", dir.path()).unwrap();
//! println!("Wrote {} for {}", result.config_path.display(), result.project_id);
//! ```

pub mod init;

pub use init::{init_config, write_config, InitResult};
