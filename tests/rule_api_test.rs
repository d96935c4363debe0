//! Integration tests for the rule's public API.

use depend_on_all::reactor::{load_reactor, Dependency, Module};
use depend_on_all::rule::{evaluate, DependOnAllRule, Outcome, RuleContext};
use depend_on_all::scope::{RawScopeParams, ScopeConfig};
use depend_on_all::selector::Selector;
use depend_on_all::RuleError;
use std::fs;
use tempfile::TempDir;

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|s| s.to_string()).collect())
}

#[test]
fn reactor_file_to_outcome() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("reactor.yml"),
        r#"
group: org.example
version: 3.1.0
top_level: parent
modules:
  - artifact: api
  - artifact: impl
    dependencies:
      - artifact: api
  - group: org.thirdparty
    artifact: shim
  - artifact: parent
    packaging: pom
    dependencies:
      - artifact: api
    depend_on_all:
      includes: ["org.example:*"]
"#,
    )
    .unwrap();

    let reactor = load_reactor(temp.path(), None).unwrap();
    let (current, params) = reactor.configured().next().unwrap();
    let ctx = RuleContext::new(reactor.modules(), current, reactor.top_level());

    match evaluate(params, &ctx).unwrap() {
        Outcome::Failed(report) => {
            let missing: Vec<_> = report.missing().iter().map(|m| m.canonical_id()).collect();
            assert_eq!(missing, vec!["org.example:impl:jar"]);
        }
        Outcome::Passed => panic!("Expected a failure"),
    }
}

#[test]
fn selectors_compile_to_anchored_patterns() {
    let selector = Selector::parse("org.apache.*:*", "includes").unwrap();
    let pattern = selector.compile().unwrap();

    assert!(pattern.is_match("org.apache.maven:core:jar"));
    assert!(!pattern.is_match("org.apachex:core:jar"));
    assert!(!pattern.is_match("com.org.apache.maven:core:jar"));
}

#[test]
fn artifact_only_selector_matches_any_group() {
    let modules = vec![
        Module::new("com.acme", "apache", "1", "jar"),
        Module::new("org.other", "apache", "1", "pom"),
        Module::new("org.other", "apache-commons", "1", "jar"),
        Module::new("root", "root", "1", "pom"),
    ];
    let raw = RawScopeParams {
        includes: strings(&["apache"]),
        ..Default::default()
    };
    let config = ScopeConfig::resolve(&raw, &modules).unwrap();

    let included: Vec<_> = modules.iter().filter(|m| config.is_included(m)).collect();
    assert_eq!(included.len(), 2);
}

#[test]
fn configuration_errors_are_reported_in_order() {
    let modules = vec![Module::new("g", "a", "1", "jar")];
    let raw = RawScopeParams {
        includes: strings(&[" "]),
        excludes: strings(&[""]),
        include_root_module: Some("TRUE".to_string()),
        ..Default::default()
    };

    let err = ScopeConfig::resolve(&raw, &modules).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failure in parameter 'includes'. String contains only whitespace: ' '"
    );
    assert!(matches!(err, RuleError::MalformedSelector { .. }));
}

#[test]
fn wildcard_selectors_skip_existence_check() {
    let modules = vec![Module::new("g", "a", "1", "jar")];
    let raw = RawScopeParams {
        includes: strings(&["nothing:*"]),
        error_if_unknown_selector: Some("true".to_string()),
        ..Default::default()
    };

    assert!(ScopeConfig::resolve(&raw, &modules).is_ok());
}

#[test]
fn unknown_exclude_selector_fails_when_checked() {
    let modules = vec![Module::new("g", "a", "1", "jar")];
    let raw = RawScopeParams {
        excludes: strings(&["g:b"]),
        error_if_unknown_selector: Some("true".to_string()),
        ..Default::default()
    };

    match ScopeConfig::resolve(&raw, &modules) {
        Err(RuleError::UnknownSelector { parameter, selector }) => {
            assert_eq!(parameter, "excludes");
            assert_eq!(selector, "g:b");
        }
        other => panic!("Expected UnknownSelector, got {:?}", other),
    }
}

#[test]
fn declared_dependency_must_match_version_and_type() {
    let lib = Module::new("g", "lib", "2.0", "jar");
    let root = Module::new("g", "root", "2.0", "pom")
        .with_dependency(Dependency::new("g", "lib", "1.0", "jar"));
    let modules = vec![lib, root.clone()];

    let rule = DependOnAllRule::from_params(&RawScopeParams::default(), &modules).unwrap();
    let outcome = rule.evaluate(&RuleContext::new(&modules, &root, &root));

    assert!(!outcome.is_passed());
}
