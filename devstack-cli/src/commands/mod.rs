//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the project file
//! - `validate`: Load and validate the project configuration
//! - `show`: Print the resolved configuration
//! - `ids`: Print derived container identifiers
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod ids;
pub mod init;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use ids::IdsCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
