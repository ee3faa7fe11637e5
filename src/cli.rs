use std::path::PathBuf;

use clap::Parser;

use crate::common::{FormatArgs, LimitArgs};

#[derive(Parser, Debug)]
#[command(
    name = "depcycle",
    about = "Detect circular dependencies in a plain-text dependency list",
    long_about = "depcycle reads a dependency list where each line names an entity followed by \
                  the entities it depends on, separated by colons, commas or whitespace \
                  (`main.c: parser.c, lexer.c`). It resolves the list into a directed graph and \
                  reports whether any dependency cycle exists. Dependencies on names that are \
                  never declared on their own line are ignored.",
    version
)]
pub struct Cli {
    /// Dependency list to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,

    #[command(flatten)]
    pub limits: LimitArgs,

    /// Exit with code 3 if a cycle is found
    #[arg(long, env = "DEPCYCLE_ERROR_ON_CYCLES")]
    pub error_on_cycles: bool,

    /// Don't show progress on stderr
    #[arg(short, long, env = "DEPCYCLE_QUIET")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional() {
        let cli = Cli::try_parse_from(["depcycle", "deps.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("deps.txt"));
        assert_eq!(cli.format.format, OutputFormat::Human);
        assert!(!cli.error_on_cycles);
        assert!(!cli.limits.legacy_limits);
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        let err = Cli::try_parse_from(["depcycle"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_extra_positional_is_usage_error() {
        let err = Cli::try_parse_from(["depcycle", "a.txt", "b.txt"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "depcycle",
            "--format",
            "github",
            "--error-on-cycles",
            "--max-entities",
            "10",
            "--legacy-limits",
            "-q",
            "deps.txt",
        ])
        .unwrap();

        assert_eq!(cli.format.format, OutputFormat::GitHub);
        assert!(cli.error_on_cycles);
        assert_eq!(cli.limits.max_entities, Some(10));
        assert!(cli.limits.legacy_limits);
        assert!(cli.quiet);
    }
}
