//! Human-readable console report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::CheckOutcome;
use crate::error::DepCycleError;

/// Prints exactly one line: the verdict
///
/// The line is left unstyled so scripts can match on it.
pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcome: &CheckOutcome) -> Result<String, DepCycleError> {
        let mut output = String::new();
        writeln!(output, "{}", outcome.verdict)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::reports::test_support::outcome;

    #[test]
    fn test_cyclic_line() {
        let report = HumanReportGenerator::new()
            .generate_report(&outcome(Verdict::Cyclic))
            .unwrap();
        assert_eq!(report, "Cyclic Dependency\n");
    }

    #[test]
    fn test_acyclic_line() {
        let report = HumanReportGenerator::new()
            .generate_report(&outcome(Verdict::Acyclic))
            .unwrap();
        assert_eq!(report, "No cyclic dependency\n");
        assert_eq!(report.lines().count(), 1);
    }
}
