//! Integration tests for the devstack CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn devstack() -> Command {
    Command::cargo_bin("devstack").expect("Failed to find devstack binary")
}

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    // With clap subcommands required, no arguments should fail and show usage
    devstack()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    devstack()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("devstack"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists every command.
#[test]
fn test_cli_help_flag() {
    devstack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("ids"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--workdir"));
}

/// Test that an unknown subcommand is rejected.
#[test]
fn test_cli_unknown_command() {
    devstack()
        .arg("reserve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that an unknown output format is rejected by the parser.
#[test]
fn test_cli_invalid_format() {
    devstack()
        .args(["show", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

/// Test that completions are generated for the installed binary name.
#[test]
fn test_cli_completions_bash() {
    devstack()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devstack"))
        .stderr(predicate::str::contains("completions bash"));
}
