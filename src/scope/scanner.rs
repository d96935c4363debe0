//! Reactor scanning.
//!
//! Walks the reactor in build order and keeps the modules the current
//! module is expected to depend on.

use tracing::debug;

use crate::reactor::{modules_equal, Module};
use crate::selector::Selector;

use super::config::ScopeConfig;

/// Collect the in-scope modules of the reactor, preserving build order.
///
/// A module is skipped when it is out of scope per `config`, when it is the
/// current module, or when it is the top-level module and
/// `include_root_module` is off.
pub fn scope<'a>(
    modules: &'a [Module],
    config: &ScopeConfig,
    current: &Module,
    top_level: &Module,
) -> Vec<&'a Module> {
    let mut scoped = Vec::new();

    for module in modules {
        debug!("    {}", module);

        if !config.is_included(module) {
            continue;
        }

        if modules_equal(module, current) {
            debug!("Filter out current module: {}", module.coordinates());
            continue;
        }

        if !config.include_root_module() && modules_equal(module, top_level) {
            debug!("Filter out root module: {}", module.coordinates());
            continue;
        }

        scoped.push(module);
    }

    scoped
}

/// Whether any reactor module matches the selector by exact segment equality.
///
/// Intended for selectors without wildcards; see [`Selector::matches_exactly`].
pub fn selector_matches_any_module(modules: &[Module], selector: &Selector) -> bool {
    modules.iter().any(|m| selector.matches_exactly(m))
}
