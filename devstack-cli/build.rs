//! Build script for devstack-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("devstack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Initialize and inspect devstack projects")
        .long_about(
            "Command-line tool for creating, validating and inspecting the layered \
             configuration of a devstack local development project",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("workdir")
                .long("workdir")
                .help("Project root to use instead of the current directory")
                .value_name("PATH")
                .global(true)
                .env("DEVSTACK_WORKDIR"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create devstack/config.toml in the project root")
                .long_about(
                    "Write the default project file. An existing non-empty file is never modified",
                ),
            Command::new("validate")
                .about("Load the project configuration and report problems")
                .long_about("Run the full load pipeline and report the first problem found"),
            Command::new("show")
                .about("Print the resolved configuration with secrets redacted")
                .long_about("Print the resolved configuration as TOML, JSON or YAML"),
            Command::new("ids")
                .about("Print the derived container and network identifiers")
                .long_about("Print one identifier per orchestrated service, optionally as exports"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main devstack.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("devstack.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
