//! Command to validate the project configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Load the project configuration and report problems.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        if !global.quiet {
            println!(
                "Configuration is valid (project {}, Postgres {})",
                config.project_id, config.db.major_version
            );
        }
        Ok(())
    }
}
