//! Init command implementation.
//!
//! This module implements the `init` command, which writes a fresh
//! `devstack/config.toml` into the project root.

use crate::error::CliError;
use crate::utils::{project_root, GlobalOptions};
use clap::Parser;
use devstack::init_config;

/// Create devstack/config.toml in the project root.
#[derive(Parser)]
#[command(about = "Create devstack/config.toml in the project root")]
pub struct InitCommand {
    /// Project id; defaults to the project directory name
    #[arg(long, value_name = "ID", default_value = "")]
    project_id: String,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// An existing project file is left untouched and reported, not treated
    /// as an error.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let root = project_root(global)?;
        let result = init_config(&self.project_id, &root)?;

        if global.quiet {
            return Ok(());
        }

        if result.created {
            println!(
                "Initialized project {} in: {}",
                result.project_id,
                result.config_path.display()
            );
            if result.config_dir_created {
                println!("  - Created config directory");
            }
            println!("  - Created configuration file");
        } else {
            println!(
                "Configuration file already exists (not overwritten): {}",
                result.config_path.display()
            );
        }

        Ok(())
    }
}
