//! Missing-dependency detection.

use tracing::debug;

use crate::reactor::{Dependency, Module};

/// Modules from `scoped` that `declared` does not point at.
///
/// Order follows `scoped`; duplicates in the input produce duplicates in
/// the output.
pub fn find_missing<'a>(scoped: &[&'a Module], declared: &[Dependency]) -> Vec<&'a Module> {
    let missing: Vec<&Module> = scoped
        .iter()
        .copied()
        .filter(|module| !module.is_declared_in(declared))
        .collect();
    debug!(
        "{} of {} scoped module(s) missing from declared dependencies",
        missing.len(),
        scoped.len()
    );
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(artifact: &str) -> Module {
        Module::new("g", artifact, "1.0", "jar")
    }

    #[test]
    fn returns_undeclared_in_scan_order() {
        let a = module("a");
        let b = module("b");
        let c = module("c");
        let declared = vec![b.to_dependency()];

        let missing = find_missing(&[&c, &b, &a], &declared);

        let names: Vec<_> = missing.iter().map(|m| m.artifact.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn nothing_missing_when_all_declared() {
        let a = module("a");
        let b = module("b");
        let declared = vec![a.to_dependency(), b.to_dependency()];

        assert!(find_missing(&[&a, &b], &declared).is_empty());
    }

    #[test]
    fn version_mismatch_counts_as_missing() {
        let a = module("a");
        let declared = vec![Dependency::new("g", "a", "2.0", "jar")];

        assert_eq!(find_missing(&[&a], &declared).len(), 1);
    }

    #[test]
    fn type_mismatch_counts_as_missing() {
        let parent = Module::new("g", "parent", "1.0", "pom");
        let declared = vec![Dependency::new("g", "parent", "1.0", "jar")];

        assert_eq!(find_missing(&[&parent], &declared).len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let a = module("a");
        let missing = find_missing(&[&a, &a], &[]);
        assert_eq!(missing.len(), 2);
    }
}
