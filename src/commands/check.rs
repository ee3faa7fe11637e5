//! Check command implementation

use std::process::ExitCode;

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCli};
use crate::config::{CheckConfig, ParseLimits};
use crate::error::DepCycleError;

impl FromCli for CheckConfig {
    fn from_cli(cli: Cli) -> Result<Self, DepCycleError> {
        CheckConfig::builder()
            .with_limits(ParseLimits::from(&cli.limits))
            .with_file(cli.file)
            .with_format(cli.format.format)
            .with_error_on_cycles(cli.error_on_cycles)
            .with_quiet(cli.quiet)
            .build()
    }
}

crate::impl_try_from_cli!(CheckConfig);

/// Execute the check command for one dependency list
pub fn execute_check_command(cli: Cli) -> Result<ExitCode> {
    let config =
        CheckConfig::from_cli(cli).wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
