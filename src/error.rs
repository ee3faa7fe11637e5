use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// The capacity limit that a dependency list overran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Entities,
    Dependencies,
    NameLength,
}

impl std::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitKind::Entities => write!(f, "entity count"),
            LimitKind::Dependencies => write!(f, "dependencies per entity"),
            LimitKind::NameLength => write!(f, "name length"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepCycleError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depcycle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Limit exceeded: {limit} of {value} is over the maximum of {max} ('{entity}', line {line})"
    )]
    #[diagnostic(
        code(depcycle::limit_exceeded),
        help("Raise the limit with the matching --max-* option, or drop --legacy-limits")
    )]
    LimitExceeded {
        limit: LimitKind,
        value: usize,
        max: usize,
        entity: String,
        line: usize,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depcycle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depcycle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(depcycle::io_error),
        help("Check file permissions and that the input is valid UTF-8")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depcycle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepCycleError::FileReadError {
            path: PathBuf::from("/tmp/missing.deps"),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to read file '/tmp/missing.deps'");
    }

    #[test]
    fn test_limit_exceeded_display() {
        let error = DepCycleError::LimitExceeded {
            limit: LimitKind::Dependencies,
            value: 101,
            max: 100,
            entity: "main.c".to_string(),
            line: 7,
        };

        assert_eq!(
            error.to_string(),
            "Limit exceeded: dependencies per entity of 101 is over the maximum of 100 ('main.c', \
             line 7)"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = DepCycleError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        let error_str = error.to_string();
        assert_eq!(
            error_str,
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = DepCycleError::FileReadError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        };

        // Verify the error has diagnostic information
        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepCycleError = io_err.into();

        match err {
            DepCycleError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: DepCycleError = json_err.into();

        match err {
            DepCycleError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
