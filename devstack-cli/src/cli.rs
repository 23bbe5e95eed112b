//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, IdsCommand, InitCommand, ShowCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for devstack project configuration.
#[derive(Parser)]
#[command(name = "devstack")]
#[command(version, about = "Initialize and inspect devstack projects", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Project root to use instead of the current directory
    #[arg(long, value_name = "PATH", global = true, env = "DEVSTACK_WORKDIR")]
    pub workdir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create devstack/config.toml in the project root
    Init(InitCommand),

    /// Load the project configuration and report problems
    Validate(ValidateCommand),

    /// Print the resolved configuration with secrets redacted
    Show(ShowCommand),

    /// Print the derived container and network identifiers
    Ids(IdsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
