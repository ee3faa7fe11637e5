//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::CheckOutcome;
use crate::error::DepCycleError;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, outcome: &CheckOutcome) -> Result<String, DepCycleError> {
        let mut output = String::new();
        let file = outcome.file.display();

        if outcome.has_cycle() {
            writeln!(
                output,
                "::error file={file},title=Dependency Cycle::Cyclic dependency detected"
            )?;
        } else {
            writeln!(
                output,
                "::notice file={file},title=Dependency Check::No cyclic dependency ✅"
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::reports::test_support::outcome;

    #[test]
    fn test_error_annotation_when_cyclic() {
        let report = GitHubReportGenerator::new()
            .generate_report(&outcome(Verdict::Cyclic))
            .unwrap();
        assert_eq!(
            report,
            "::error file=deps.txt,title=Dependency Cycle::Cyclic dependency detected\n"
        );
    }

    #[test]
    fn test_notice_when_acyclic() {
        let report = GitHubReportGenerator::new()
            .generate_report(&outcome(Verdict::Acyclic))
            .unwrap();
        assert!(report.starts_with("::notice file=deps.txt"));
        assert_eq!(report.lines().count(), 1);
    }
}
