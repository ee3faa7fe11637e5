//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::CheckOutcome;
use crate::error::DepCycleError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, outcome: &CheckOutcome) -> Result<String, DepCycleError> {
        let mut output = String::new();
        let failures = if outcome.has_cycle() { "1" } else { "0" };
        let file = escape_xml(&outcome.file.display().to_string());

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="depcycle" tests="1" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="{file}" tests="1" failures="{failures}">"#
        )?;

        if outcome.has_cycle() {
            writeln!(
                output,
                r#"    <testcase name="check-dependency-cycles" classname="depcycle">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="Cyclic dependency detected">"#
            )?;
            writeln!(
                output,
                "{} entities, {} dependencies",
                outcome.stats.entities, outcome.stats.edges
            )?;
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        } else {
            writeln!(
                output,
                r#"    <testcase name="check-dependency-cycles" classname="depcycle" />"#
            )?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
