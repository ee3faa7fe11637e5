//! Check command configuration

use std::path::PathBuf;

use super::ParseLimits;
use crate::cli::OutputFormat;
use crate::error::DepCycleError;

/// Configuration for a single cycle check
///
/// This struct contains all options for reading one dependency list and
/// reporting whether it contains a cycle.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Dependency list to read
    pub file: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with a dedicated code if a cycle is found
    pub error_on_cycles: bool,
    /// Capacity limits applied while building the graph
    pub limits: ParseLimits,
    /// Suppress progress output on stderr
    pub quiet: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    limits: Option<ParseLimits>,
    quiet: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            format: None,
            error_on_cycles: None,
            limits: None,
            quiet: None,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
}

fn missing(field: &str) -> DepCycleError {
    DepCycleError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, DepCycleError> {
        Ok(CheckConfig {
            file: self.file.ok_or_else(|| missing("file"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            error_on_cycles: self.error_on_cycles.unwrap_or(false),
            limits: self.limits.unwrap_or_default(),
            quiet: self.quiet.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_with_all_fields() {
        let config = CheckConfig::builder()
            .with_file(PathBuf::from("deps.txt"))
            .with_format(OutputFormat::Json)
            .with_error_on_cycles(true)
            .with_limits(ParseLimits::legacy())
            .with_quiet(true)
            .build()
            .unwrap();

        assert_eq!(config.file, PathBuf::from("deps.txt"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.error_on_cycles);
        assert_eq!(config.limits, ParseLimits::legacy());
        assert!(config.quiet);
    }

    #[test]
    fn test_builder_defaults() {
        let config = CheckConfig::builder()
            .with_file(PathBuf::from("deps.txt"))
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        assert!(!config.error_on_cycles);
        assert!(config.limits.is_unbounded());
        assert!(!config.quiet);
    }

    #[test]
    fn test_builder_missing_file() {
        let err = CheckConfig::builder()
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: file"
        );
    }
}
