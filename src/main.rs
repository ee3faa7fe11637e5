use std::process::ExitCode;

use miette::Result;

/// Main entry point for the depcycle CLI tool
fn main() -> Result<ExitCode> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    depcycle::run()
}
