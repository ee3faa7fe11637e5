//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::CheckOutcome;
use crate::error::DepCycleError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcome: &CheckOutcome) -> Result<String, DepCycleError> {
        let report = json!({
            "file": outcome.file.display().to_string(),
            "has_cycle": outcome.has_cycle(),
            "verdict": outcome.verdict,
            "entities": outcome.stats.entities,
            "edges": outcome.stats.edges,
            "dropped_dependencies": outcome.stats.dropped_dependencies,
        });

        let mut output = serde_json::to_string_pretty(&report).map_err(DepCycleError::Json)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::core::Verdict;
    use crate::reports::test_support::outcome;

    #[test]
    fn test_json_report_with_cycle() {
        let report = JsonReportGenerator::new()
            .generate_report(&outcome(Verdict::Cyclic))
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "file": "deps.txt",
                "has_cycle": true,
                "verdict": "cyclic",
                "entities": 4,
                "edges": 3,
                "dropped_dependencies": 1,
            })
        );
    }

    #[test]
    fn test_json_report_without_cycle() {
        let report = JsonReportGenerator::new()
            .generate_report(&outcome(Verdict::Acyclic))
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycle"], false);
        assert_eq!(json["verdict"], "acyclic");
    }
}
