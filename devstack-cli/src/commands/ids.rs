//! Ids command implementation.
//!
//! This module implements the `ids` command, which prints the identifiers
//! derived from the project id for every orchestrated service.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use devstack::ServiceIds;

/// Print the derived container and network identifiers.
#[derive(Args)]
pub struct IdsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: IdsFormat,
}

/// Output format for ids command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum IdsFormat {
    /// Aligned `name  identifier` lines
    Human,
    /// `export DEVSTACK_<NAME>_ID=identifier` lines for shells
    Export,
}

impl IdsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", format_ids(&config.services, self.format));
        Ok(())
    }
}

/// Format every identifier, one per line.
pub fn format_ids(ids: &ServiceIds, format: IdsFormat) -> String {
    let entries = ids.entries();
    match format {
        IdsFormat::Human => {
            let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            entries
                .iter()
                .map(|(name, id)| format!("{name:<width$}  {id}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
        IdsFormat::Export => entries
            .iter()
            .map(|(name, id)| format!("export DEVSTACK_{}_ID={id}", name.to_uppercase()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
