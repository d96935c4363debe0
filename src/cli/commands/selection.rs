//! Choosing which modules a command evaluates.
//!
//! Explicit `--module` references win. Without them every module that
//! configures the rule is used, in build order. When no module configures
//! it, the top-level module is checked with default parameters.

use tracing::debug;

use crate::cli::args::TargetArgs;
use crate::error::Result;
use crate::reactor::{Module, Reactor};
use crate::scope::RawScopeParams;

/// A module to evaluate with its effective parameters.
#[derive(Debug, Clone)]
pub struct Target<'r> {
    /// The module whose dependencies are checked.
    pub module: &'r Module,
    /// File parameters with CLI overrides applied.
    pub params: RawScopeParams,
}

/// Resolve the modules and parameters for a command.
///
/// # Errors
///
/// Returns `UnknownModule` when a `--module` reference matches nothing.
pub fn select_targets<'r>(reactor: &'r Reactor, args: &TargetArgs) -> Result<Vec<Target<'r>>> {
    let overrides = args.rule.to_overrides();

    let targets: Vec<Target<'r>> = if !args.modules.is_empty() {
        args.modules
            .iter()
            .map(|reference| {
                let module = reactor.find(reference)?;
                let file_params = reactor.rule_params(module).cloned().unwrap_or_default();
                Ok(Target {
                    module,
                    params: file_params.merged_with(&overrides),
                })
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        let configured: Vec<Target<'r>> = reactor
            .configured()
            .map(|(module, params)| Target {
                module,
                params: params.merged_with(&overrides),
            })
            .collect();

        if configured.is_empty() {
            debug!("No module configures the rule; checking the top-level module");
            vec![Target {
                module: reactor.top_level(),
                params: overrides,
            }]
        } else {
            configured
        }
    };

    debug!(
        "Targets: {:?}",
        targets
            .iter()
            .map(|t| t.module.coordinates())
            .collect::<Vec<_>>()
    );
    Ok(targets)
}
