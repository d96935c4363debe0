//! Check result formatters.
//!
//! This module provides formatters for writing rule results
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::reactor::Module;
use crate::rule::Outcome;
use std::io::Write;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The plain failure message, ready to paste from.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Rule outcome for one checked module.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The module whose dependencies were checked.
    pub module: Module,
    /// What the rule found.
    pub outcome: Outcome,
}

impl CheckResult {
    /// Pair a module with its outcome.
    pub fn new(module: Module, outcome: Outcome) -> Self {
        Self { module, outcome }
    }
}

/// Trait for formatting check results.
pub trait ReportFormatter {
    /// Format results to the given writer.
    fn format<W: Write>(&self, results: &[CheckResult], writer: &mut W) -> std::io::Result<()>;
}

/// Format results into a string.
pub fn format_to_string<F: ReportFormatter>(
    formatter: &F,
    results: &[CheckResult],
) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    formatter.format(results, &mut buffer)?;
    String::from_utf8(buffer).map_err(std::io::Error::other)
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
