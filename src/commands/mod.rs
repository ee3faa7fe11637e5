//! Command implementations for the depcycle CLI
//!
//! depcycle has a single command: check one dependency list for cycles.

pub mod check;

use std::process::ExitCode;

use miette::Result;

use crate::cli::Cli;

/// Execute the command described by the CLI input
pub fn execute_command(cli: Cli) -> Result<ExitCode> {
    check::execute_check_command(cli)
}
