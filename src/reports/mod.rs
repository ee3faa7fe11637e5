//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: a single verdict line
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::cli::OutputFormat;
use crate::core::CheckOutcome;
use crate::error::DepCycleError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the outcome of a check
    fn generate_report(&self, outcome: &CheckOutcome) -> Result<String, DepCycleError>;
}

/// Pick the generator for an output format
pub fn generator_for(format: OutputFormat) -> Box<dyn ReportGenerator> {
    match format {
        OutputFormat::Human => Box::new(HumanReportGenerator::new()),
        OutputFormat::Json => Box::new(JsonReportGenerator::new()),
        OutputFormat::Junit => Box::new(JunitReportGenerator::new()),
        OutputFormat::GitHub => Box::new(GitHubReportGenerator::new()),
    }
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
