//! Show command implementation.
//!
//! This module implements the `show` command, which prints the resolved
//! configuration in TOML, JSON or YAML. Secrets are always redacted.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use devstack::Config;

/// Print the resolved configuration with secrets redacted.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "toml", ignore_case = true)]
    pub format: ShowFormat,
}

/// Output format for show command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// TOML, the project file format
    Toml,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let rendered = render(&config, self.format)?;
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

/// Serialize `config` in the requested format.
pub fn render(config: &Config, format: ShowFormat) -> Result<String, CliError> {
    match format {
        ShowFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| CliError::Output(e.to_string()))
        }
        ShowFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| CliError::Output(e.to_string()))
        }
        ShowFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| CliError::Output(e.to_string()))
        }
    }
}
