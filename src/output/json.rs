//! JSON output formatter.
//!
//! Formats check results as machine-readable JSON for tooling integration.

use super::{CheckResult, ReportFormatter};
use crate::reactor::Dependency;
use crate::rule::Outcome;
use serde::Serialize;
use std::io::Write;

/// Formats check results as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    results: Vec<JsonResult>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult {
    module: String,
    status: &'static str,
    missing: Vec<Dependency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    checked: usize,
    passed: usize,
    failed: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, results: &[CheckResult], writer: &mut W) -> std::io::Result<()> {
        let json_results: Vec<_> = results
            .iter()
            .map(|r| match &r.outcome {
                Outcome::Passed => JsonResult {
                    module: r.module.coordinates(),
                    status: "passed",
                    missing: Vec::new(),
                    message: None,
                },
                Outcome::Failed(report) => JsonResult {
                    module: r.module.coordinates(),
                    status: "failed",
                    missing: report.missing().iter().map(|m| m.to_dependency()).collect(),
                    message: Some(report.message()),
                },
            })
            .collect();

        let failed = results.iter().filter(|r| !r.outcome.is_passed()).count();
        let summary = JsonSummary {
            checked: results.len(),
            passed: results.len() - failed,
            failed,
        };

        let output = JsonOutput {
            results: json_results,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::Module;
    use crate::rule::MissingDependencyReport;

    fn render(results: &[CheckResult]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(results, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let root = Module::new("g", "root", "1", "pom");
        let parsed = render(&[CheckResult::new(root, Outcome::Passed)]);

        assert!(parsed["results"].is_array());
        assert_eq!(parsed["results"][0]["module"], "g:root");
        assert_eq!(parsed["results"][0]["status"], "passed");
        assert!(parsed["results"][0]["message"].is_null());
    }

    #[test]
    fn failed_result_lists_missing_dependencies() {
        let root = Module::new("g", "root", "1", "pom");
        let web = Module::new("g", "web", "2.0", "war");
        let report = MissingDependencyReport::new(&root, &[&web]);

        let parsed = render(&[CheckResult::new(root, Outcome::Failed(report))]);
        let missing = &parsed["results"][0]["missing"][0];

        assert_eq!(parsed["results"][0]["status"], "failed");
        assert_eq!(missing["group"], "g");
        assert_eq!(missing["artifact"], "web");
        assert_eq!(missing["version"], "2.0");
        assert_eq!(missing["type"], "war");
        assert!(parsed["results"][0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Project 'g:root' is missing dependency 'g:web:war'."));
    }

    #[test]
    fn summary_counts_outcomes() {
        let root = Module::new("g", "root", "1", "pom");
        let a = Module::new("g", "a", "1", "jar");
        let report = MissingDependencyReport::new(&root, &[&a]);

        let parsed = render(&[
            CheckResult::new(root, Outcome::Failed(report)),
            CheckResult::new(a, Outcome::Passed),
        ]);

        assert_eq!(parsed["summary"]["checked"], 2);
        assert_eq!(parsed["summary"]["passed"], 1);
        assert_eq!(parsed["summary"]["failed"], 1);
    }

    #[test]
    fn empty_results() {
        let parsed = render(&[]);
        assert_eq!(parsed["summary"]["checked"], 0);
    }
}
