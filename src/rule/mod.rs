//! The depend-on-all rule.
//!
//! Evaluation is a single linear pass:
//!
//! 1. Resolve and validate the rule parameters ([`ScopeConfig::resolve`])
//! 2. Scan the reactor for in-scope modules ([`crate::scope::scope`])
//! 3. Compare them with the current module's declared dependencies ([`find_missing`])
//! 4. Pass silently, or fail with a [`MissingDependencyReport`]
//!
//! Any configuration error aborts before scanning.
//!
//! # Example
//!
//! ```
//! use depend_on_all::reactor::Module;
//! use depend_on_all::rule::{evaluate, Outcome, RuleContext};
//! use depend_on_all::scope::RawScopeParams;
//!
//! let a = Module::new("g", "a", "1.0", "jar");
//! let root = Module::new("g", "root", "1.0", "pom").with_dependency(a.to_dependency());
//! let modules = vec![a, root.clone()];
//!
//! let ctx = RuleContext::new(&modules, &root, &root);
//! let outcome = evaluate(&RawScopeParams::default(), &ctx).unwrap();
//! assert!(matches!(outcome, Outcome::Passed));
//! ```

pub mod gap;
pub mod report;

pub use gap::find_missing;
pub use report::{format_dependency, MissingDependencyReport, DEPENDENCY_INDENT};

use tracing::debug;

use crate::error::Result;
use crate::reactor::Module;
use crate::scope::{self, RawScopeParams, ScopeConfig};

/// Everything the host build supplies for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Reactor modules in build order.
    pub modules: &'a [Module],
    /// The module whose dependencies are checked.
    pub current: &'a Module,
    /// The root module of the build.
    pub top_level: &'a Module,
}

impl<'a> RuleContext<'a> {
    /// Create a new rule context.
    pub fn new(modules: &'a [Module], current: &'a Module, top_level: &'a Module) -> Self {
        Self {
            modules,
            current,
            top_level,
        }
    }
}

/// Result of evaluating the rule for one module.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The module depends on every in-scope module.
    Passed,
    /// Some in-scope modules are not declared as dependencies.
    Failed(MissingDependencyReport),
}

impl Outcome {
    /// Whether the rule passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(report) => Some(report.message()),
        }
    }
}

/// The rule with its resolved configuration.
#[derive(Debug, Clone)]
pub struct DependOnAllRule {
    config: ScopeConfig,
}

impl DependOnAllRule {
    /// Create a rule from an already resolved configuration.
    pub fn new(config: ScopeConfig) -> Self {
        Self { config }
    }

    /// Resolve raw parameters against the reactor and build the rule.
    pub fn from_params(raw: &RawScopeParams, modules: &[Module]) -> Result<Self> {
        Ok(Self::new(ScopeConfig::resolve(raw, modules)?))
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Stable rendering of the resolved configuration.
    pub fn describe(&self) -> String {
        self.config.describe()
    }

    /// In-scope modules for the context, in reactor order.
    pub fn scan<'a>(&self, ctx: &RuleContext<'a>) -> Vec<&'a Module> {
        debug!("Current module: {}", ctx.current.coordinates());
        debug!("Top level module: {}", ctx.top_level.coordinates());
        scope::scope(ctx.modules, &self.config, ctx.current, ctx.top_level)
    }

    /// Run the gap check for the context.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Outcome {
        let scoped = self.scan(ctx);
        debug!(
            "scoped modules: {:?}",
            scoped.iter().map(|m| m.coordinates()).collect::<Vec<_>>()
        );

        let missing = find_missing(&scoped, ctx.current.declared_dependencies());
        if missing.is_empty() {
            Outcome::Passed
        } else {
            Outcome::Failed(MissingDependencyReport::new(ctx.current, &missing))
        }
    }
}

/// Validate `raw` and evaluate the rule in one step.
///
/// # Errors
///
/// Returns the configuration error if the parameters do not validate;
/// scanning never starts in that case.
pub fn evaluate(raw: &RawScopeParams, ctx: &RuleContext<'_>) -> Result<Outcome> {
    let rule = DependOnAllRule::from_params(raw, ctx.modules)?;
    Ok(rule.evaluate(ctx))
}
