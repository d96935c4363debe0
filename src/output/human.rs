//! Human-readable output formatter.
//!
//! Writes the failure message of each failed module, separated by a blank
//! line. Passing modules produce no output.

use super::{CheckResult, ReportFormatter};
use crate::rule::Outcome;
use std::io::Write;

/// Formats check results for human consumption.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, results: &[CheckResult], writer: &mut W) -> std::io::Result<()> {
        let mut first = true;
        for result in results {
            if let Outcome::Failed(report) = &result.outcome {
                if !first {
                    writeln!(writer)?;
                }
                writeln!(writer, "{}", report.message())?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::format_to_string;
    use crate::reactor::Module;
    use crate::rule::MissingDependencyReport;

    fn failed(current: &Module, missing: &[&Module]) -> CheckResult {
        CheckResult::new(
            current.clone(),
            Outcome::Failed(MissingDependencyReport::new(current, missing)),
        )
    }

    #[test]
    fn passing_results_print_nothing() {
        let root = Module::new("g", "root", "1", "pom");
        let results = vec![CheckResult::new(root, Outcome::Passed)];

        let output = format_to_string(&HumanFormatter::new(), &results).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn failure_prints_exact_message() {
        let root = Module::new("g", "root", "1", "pom");
        let a = Module::new("g", "a", "1", "jar");

        let output = format_to_string(&HumanFormatter::new(), &[failed(&root, &[&a])]).unwrap();

        insta::assert_snapshot!(output.trim_end(), @r"
        Project 'g:root' is missing dependency 'g:a:jar'.
        Missing definitions from the project 'g:root':
        <!--     Created by depend-on-all rule dependOnAllProjects     -->
        <dependency>
            <groupId>g</groupId>
            <artifactId>a</artifactId>
        </dependency>
        <!--     / Created by depend-on-all rule dependOnAllProjects     -->
        ");
    }

    #[test]
    fn failures_are_separated_by_blank_line() {
        let a = Module::new("g", "a", "1", "jar");
        let b = Module::new("g", "b", "1", "jar");
        let root = Module::new("g", "root", "1", "pom");

        let results = vec![
            failed(&root, &[&a]),
            CheckResult::new(a.clone(), Outcome::Passed),
            failed(&b, &[&a]),
        ];
        let output = format_to_string(&HumanFormatter::new(), &results).unwrap();

        assert!(output.contains("-->\n\nProject 'g:b'"));
        assert_eq!(output.matches("Missing definitions").count(), 2);
    }
}
