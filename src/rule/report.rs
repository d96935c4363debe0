//! Failure report for modules with missing dependencies.
//!
//! The report lists one line per missing module followed by a block of
//! `<dependency>` declarations that can be pasted into the build file.

use std::fmt;

use crate::reactor::{Dependency, Module, DEFAULT_PACKAGING};

/// Indentation used inside generated `<dependency>` elements.
pub const DEPENDENCY_INDENT: &str = "    ";

const BLOCK_BEGIN: &str = "<!--     Created by depend-on-all rule dependOnAllProjects     -->";
const BLOCK_END: &str = "<!--     / Created by depend-on-all rule dependOnAllProjects     -->";

/// Format a dependency as a `<dependency>` element.
///
/// The `<type>` line is left out for `jar`, the conventional default.
pub fn format_dependency(dependency: &Dependency, indent: &str) -> String {
    let mut lines = vec![
        "<dependency>".to_string(),
        format!("{indent}<groupId>{}</groupId>", dependency.group),
        format!("{indent}<artifactId>{}</artifactId>", dependency.artifact),
    ];
    if dependency.dep_type != DEFAULT_PACKAGING {
        lines.push(format!("{indent}<type>{}</type>", dependency.dep_type));
    }
    lines.push("</dependency>".to_string());
    lines.join("\n")
}

/// The modules a checked module fails to depend on.
#[derive(Debug, Clone)]
pub struct MissingDependencyReport {
    current: Module,
    missing: Vec<Module>,
}

impl MissingDependencyReport {
    /// Build a report for `current` and its missing modules.
    pub fn new(current: &Module, missing: &[&Module]) -> Self {
        Self {
            current: current.clone(),
            missing: missing.iter().map(|m| (*m).clone()).collect(),
        }
    }

    /// The module whose dependencies were checked.
    pub fn current(&self) -> &Module {
        &self.current
    }

    /// Missing modules in reactor order.
    pub fn missing(&self) -> &[Module] {
        &self.missing
    }

    /// One error line per missing module.
    pub fn errors(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|m| {
                format!(
                    "Project '{}' is missing dependency '{}'.",
                    self.current.coordinates(),
                    m.canonical_id()
                )
            })
            .collect()
    }

    /// The copy-pasteable block of dependency declarations.
    pub fn snippet_block(&self) -> String {
        let mut lines = vec![
            format!(
                "Missing definitions from the project '{}':",
                self.current.coordinates()
            ),
            BLOCK_BEGIN.to_string(),
        ];
        lines.extend(
            self.missing
                .iter()
                .map(|m| format_dependency(&m.to_dependency(), DEPENDENCY_INDENT)),
        );
        lines.push(BLOCK_END.to_string());
        lines.join("\n")
    }

    /// The full failure message: error lines, then the snippet block.
    pub fn message(&self) -> String {
        let mut parts = self.errors();
        parts.push(self.snippet_block());
        parts.join("\n")
    }
}

impl fmt::Display for MissingDependencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
