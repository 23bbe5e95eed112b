//! Library exports for devstack-cli.
//!
//! This module exports the CLI structure and command implementations so
//! they can be tested and documented outside the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
