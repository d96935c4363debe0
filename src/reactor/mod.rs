//! The reactor: modules of one multi-module build, in build order.
//!
//! This module handles:
//! - Module and dependency records in [`module`]
//! - The description file format in [`schema`]
//! - File discovery and loading in [`loader`]
//! - JSON Schema generation for the file format in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use depend_on_all::reactor::{parse_reactor, Reactor};
//! use std::path::Path;
//!
//! let yaml = r#"
//! group: com.acme
//! version: 1.0.0
//! top_level: root
//! modules:
//!   - artifact: core
//!   - artifact: root
//!     packaging: pom
//!     dependencies:
//!       - artifact: core
//! "#;
//! let file = parse_reactor(yaml, Path::new("reactor.yml")).unwrap();
//! let reactor = Reactor::from_file(file).unwrap();
//! assert_eq!(reactor.top_level().artifact, "root");
//! assert_eq!(reactor.modules()[0].packaging, "jar");
//! ```

pub mod json_schema;
pub mod loader;
pub mod module;
pub mod schema;

pub use json_schema::SchemaGenerator;
pub use loader::{load_reactor, load_reactor_file, parse_reactor, ReactorPaths};
pub use module::{dependency_equal, modules_equal, Dependency, Module, DEFAULT_PACKAGING};
pub use schema::{DependencyEntry, ModuleEntry, ReactorFile};

use std::collections::HashSet;

use crate::error::{Result, RuleError};
use crate::scope::RawScopeParams;
use crate::selector::Selector;

/// Validated reactor with defaults applied.
#[derive(Debug, Clone)]
pub struct Reactor {
    modules: Vec<Module>,
    rules: Vec<Option<RawScopeParams>>,
    top_level: usize,
}

impl Reactor {
    /// Build a reactor from modules directly.
    ///
    /// # Errors
    ///
    /// Returns `ReactorValidationError` if a module lacks group or artifact,
    /// if two modules share an identity, or if `top_level` is out of range.
    pub fn new(modules: Vec<Module>, top_level: usize) -> Result<Self> {
        let rules = vec![None; modules.len()];
        Self::build(modules, rules, top_level)
    }

    /// Configure the rule for the module at `index`.
    pub fn with_rule(mut self, index: usize, params: RawScopeParams) -> Self {
        if let Some(slot) = self.rules.get_mut(index) {
            *slot = Some(params);
        }
        self
    }

    /// Apply file-level defaults and validate a parsed description file.
    pub fn from_file(file: ReactorFile) -> Result<Self> {
        let default_group = file.group.unwrap_or_default();
        let default_version = file.version.unwrap_or_default();

        let mut modules = Vec::with_capacity(file.modules.len());
        let mut rules = Vec::with_capacity(file.modules.len());

        for entry in file.modules {
            let dependencies = entry
                .dependencies
                .into_iter()
                .map(|d| Dependency {
                    group: d.group.unwrap_or_else(|| default_group.clone()),
                    artifact: d.artifact,
                    version: d.version.unwrap_or_else(|| default_version.clone()),
                    dep_type: d.dep_type.unwrap_or_else(|| DEFAULT_PACKAGING.to_string()),
                })
                .collect();

            modules.push(Module {
                group: entry.group.unwrap_or_else(|| default_group.clone()),
                artifact: entry.artifact,
                version: entry.version.unwrap_or_else(|| default_version.clone()),
                packaging: entry
                    .packaging
                    .unwrap_or_else(|| DEFAULT_PACKAGING.to_string()),
                dependencies,
            });
            rules.push(entry.depend_on_all);
        }

        let reference = file
            .top_level
            .ok_or_else(|| RuleError::ReactorValidationError {
                message: "'top_level' is required".to_string(),
            })?;
        let top_level = find_index(&modules, &reference)?;

        Self::build(modules, rules, top_level)
    }

    fn build(
        modules: Vec<Module>,
        rules: Vec<Option<RawScopeParams>>,
        top_level: usize,
    ) -> Result<Self> {
        if modules.is_empty() {
            return Err(RuleError::ReactorValidationError {
                message: "reactor has no modules".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (index, module) in modules.iter().enumerate() {
            if module.group.trim().is_empty() || module.artifact.trim().is_empty() {
                return Err(RuleError::ReactorValidationError {
                    message: format!("module #{} must have a group and an artifact", index + 1),
                });
            }
            if !seen.insert(module.to_string()) {
                return Err(RuleError::ReactorValidationError {
                    message: format!("module '{}' is listed more than once", module),
                });
            }
        }

        if top_level >= modules.len() {
            return Err(RuleError::ReactorValidationError {
                message: format!("top-level index {} is out of range", top_level),
            });
        }

        Ok(Self {
            modules,
            rules,
            top_level,
        })
    }

    /// Modules in build order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// The root module of the build.
    pub fn top_level(&self) -> &Module {
        &self.modules[self.top_level]
    }

    /// Resolve a `[group:]artifact[:packaging]` reference to a module.
    ///
    /// # Errors
    ///
    /// Returns `UnknownModule` if nothing matches, and
    /// `ReactorValidationError` if the reference is ambiguous.
    pub fn find(&self, reference: &str) -> Result<&Module> {
        find_index(&self.modules, reference).map(|i| &self.modules[i])
    }

    /// Rule parameters configured for `module`, if any.
    pub fn rule_params(&self, module: &Module) -> Option<&RawScopeParams> {
        self.modules
            .iter()
            .position(|m| modules_equal(m, module))
            .and_then(|i| self.rules[i].as_ref())
    }

    /// Modules that configure the rule, in build order.
    pub fn configured(&self) -> impl Iterator<Item = (&Module, &RawScopeParams)> {
        self.modules
            .iter()
            .zip(&self.rules)
            .filter_map(|(m, r)| r.as_ref().map(|params| (m, params)))
    }
}

fn find_index(modules: &[Module], reference: &str) -> Result<usize> {
    let selector =
        Selector::parse(reference, "module").map_err(|_| RuleError::UnknownModule {
            reference: reference.to_string(),
        })?;

    let matches: Vec<usize> = modules
        .iter()
        .enumerate()
        .filter(|(_, m)| selector.matches_exactly(m))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [] => Err(RuleError::UnknownModule {
            reference: reference.to_string(),
        }),
        [index] => Ok(*index),
        _ => Err(RuleError::ReactorValidationError {
            message: format!(
                "module reference '{}' is ambiguous ({} matches)",
                reference,
                matches.len()
            ),
        }),
    }
}
