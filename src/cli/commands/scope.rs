//! Scope command implementation.
//!
//! The `depend-on-all scope` command lists the modules a selected module
//! would be required to depend on.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetArgs;
use crate::error::Result;
use crate::reactor::load_reactor;
use crate::rule::{DependOnAllRule, RuleContext};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::selection::select_targets;

/// The scope command implementation.
pub struct ScopeCommand {
    project_root: PathBuf,
    reactor: Option<PathBuf>,
    args: TargetArgs,
}

impl ScopeCommand {
    /// Create a new scope command.
    pub fn new(project_root: &Path, reactor: Option<&Path>, args: TargetArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            reactor: reactor.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ScopeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reactor = load_reactor(&self.project_root, self.reactor.as_deref())?;

        let targets = select_targets(&reactor, &self.args)?;
        let rules = targets
            .iter()
            .map(|t| DependOnAllRule::from_params(&t.params, reactor.modules()))
            .collect::<Result<Vec<_>>>()?;

        for (target, rule) in targets.iter().zip(&rules) {
            let ctx = RuleContext::new(reactor.modules(), target.module, reactor.top_level());
            let scoped = rule.scan(&ctx);

            ui.message(&format!(
                "Scope of {} ({} module(s)):",
                target.module.coordinates(),
                scoped.len()
            ));
            for module in scoped {
                ui.emit(&module.canonical_id());
            }
        }

        Ok(CommandResult::success())
    }
}
