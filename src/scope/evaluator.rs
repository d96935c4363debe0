//! Include/exclude evaluation for a single module.

use tracing::trace;

use crate::reactor::Module;
use crate::selector::MatchPattern;

/// Decide whether a module is in scope.
///
/// A module is included when at least one include pattern matches its
/// canonical id and no exclude pattern does. Excludes win on overlap.
pub fn is_included(includes: &[MatchPattern], excludes: &[MatchPattern], module: &Module) -> bool {
    let id = module.canonical_id();
    let included = includes.iter().any(|p| p.is_match(&id));
    let excluded = excludes.iter().any(|p| p.is_match(&id));
    let result = included && !excluded;
    trace!(
        "is_included({}): {} (include match: {}, exclude match: {})",
        module,
        result,
        included,
        excluded
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::compile;

    fn patterns(selectors: &[&str]) -> Vec<MatchPattern> {
        selectors.iter().map(|s| compile(s).unwrap()).collect()
    }

    fn module(group: &str, artifact: &str) -> Module {
        Module::new(group, artifact, "1.0.0", "jar")
    }

    #[test]
    fn wildcard_includes_everything() {
        let includes = patterns(&["*"]);
        assert!(is_included(
            &includes,
            &[],
            &module("com.github.mikkoi", "test-artifact")
        ));
    }

    #[test]
    fn exclude_wins_over_include() {
        let includes = patterns(&["*", "com.github.mikkoi:*"]);
        let excludes = patterns(&["com.github.mikkoi:test-artifact"]);

        assert!(!is_included(
            &includes,
            &excludes,
            &module("com.github.mikkoi", "test-artifact")
        ));
        assert!(is_included(
            &includes,
            &excludes,
            &module("com.github.mikkoi", "test-artifact-2")
        ));
    }

    #[test]
    fn excludes_accumulate() {
        let includes = patterns(&["*", "com.github.mikkoi:*"]);
        let excludes = patterns(&[
            "com.github.mikkoi:test-artifact",
            "com.gitlab.other:other-artifact",
            "com.gitlab.second:*-other-artifact",
        ]);

        assert!(is_included(
            &includes,
            &excludes,
            &module("com.github.mikkoi", "other-artifact")
        ));
        assert!(!is_included(
            &includes,
            &excludes,
            &module("com.gitlab.other", "other-artifact")
        ));
        assert!(!is_included(
            &includes,
            &excludes,
            &module("com.gitlab.second", "diff-other-artifact")
        ));
        assert!(is_included(
            &includes,
            &excludes,
            &module("com.gitlab.second", "artifact-something")
        ));
    }

    #[test]
    fn no_include_match_means_out_of_scope() {
        let includes = patterns(&["com.github:*"]);
        assert!(!is_included(
            &includes,
            &[],
            &module("com.github.mikkoi", "test-artifact-a")
        ));
    }

    #[test]
    fn empty_includes_match_nothing() {
        assert!(!is_included(&[], &[], &module("g", "a")));
    }

    #[test]
    fn packaging_segment_is_matched() {
        let includes = patterns(&["*:*:pom"]);
        let pom = Module::new("g", "parent", "1", "pom");
        let jar = Module::new("g", "lib", "1", "jar");
        assert!(is_included(&includes, &[], &pom));
        assert!(!is_included(&includes, &[], &jar));
    }
}
