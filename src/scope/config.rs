//! Scope configuration: raw rule parameters and their resolved form.
//!
//! Rule parameters arrive loosely typed from a reactor file or the command
//! line ([`RawScopeParams`]). [`ScopeConfig::resolve`] validates and
//! normalizes them once, producing an immutable value the scanner reads.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{Result, RuleError};
use crate::reactor::Module;
use crate::selector::{MatchPattern, Selector};

use super::evaluator;
use super::scanner::selector_matches_any_module;

/// Parameter name for include selectors.
pub const INCLUDES: &str = "includes";
/// Parameter name for exclude selectors.
pub const EXCLUDES: &str = "excludes";
/// Parameter name for the unknown-selector flag.
pub const ERROR_IF_UNKNOWN_SELECTOR: &str = "error_if_unknown_selector";
/// Parameter name for the root-module flag.
pub const INCLUDE_ROOT_MODULE: &str = "include_root_module";

/// Selector used when no includes are given.
pub const INCLUDE_ALL: &str = "*";

/// Rule parameters exactly as supplied, before validation.
///
/// Flags are kept as strings; YAML/JSON booleans are accepted and
/// converted to `"true"` / `"false"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScopeParams {
    /// Include selectors. Absent or empty means everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,

    /// Exclude selectors. Absent or empty means nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,

    /// Fail when a selector without wildcards matches no reactor module.
    #[serde(
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_if_unknown_selector: Option<String>,

    /// Keep the top-level module in scope.
    #[serde(
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_root_module: Option<String>,
}

impl RawScopeParams {
    /// Overlay `overrides` on top of these parameters.
    ///
    /// Every field set in `overrides` replaces the corresponding field.
    pub fn merged_with(&self, overrides: &RawScopeParams) -> RawScopeParams {
        RawScopeParams {
            includes: overrides.includes.clone().or_else(|| self.includes.clone()),
            excludes: overrides.excludes.clone().or_else(|| self.excludes.clone()),
            error_if_unknown_selector: overrides
                .error_if_unknown_selector
                .clone()
                .or_else(|| self.error_if_unknown_selector.clone()),
            include_root_module: overrides
                .include_root_module
                .clone()
                .or_else(|| self.include_root_module.clone()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<FlagRepr>::deserialize(deserializer)?;
    Ok(repr.map(|r| match r {
        FlagRepr::Bool(b) => b.to_string(),
        FlagRepr::Text(s) => s,
    }))
}

/// Parse a boolean-like parameter.
///
/// Absent and empty values are `false`. Anything other than exactly
/// `"true"` or `"false"` is rejected.
pub fn parse_flag(parameter: &str, value: Option<&str>) -> Result<bool> {
    match value {
        None | Some("") | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(RuleError::MalformedFlag {
            parameter: parameter.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Validated include/exclude selectors and flags for one evaluation.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    includes: Vec<Selector>,
    excludes: Vec<Selector>,
    include_patterns: Vec<MatchPattern>,
    exclude_patterns: Vec<MatchPattern>,
    error_if_unknown_selector: bool,
    include_root_module: bool,
}

impl ScopeConfig {
    /// Validate and normalize raw parameters against the reactor.
    ///
    /// Includes are checked first, then excludes, then the flags. Empty
    /// includes become `["*"]`.
    ///
    /// # Errors
    ///
    /// - `MalformedSelector` for empty, whitespace-only, or over-long selectors
    /// - `UnknownSelector` when `error_if_unknown_selector` is on and a
    ///   selector without wildcards matches no module in `reactor_modules`
    /// - `MalformedFlag` for flag values other than `true` / `false`
    pub fn resolve(raw: &RawScopeParams, reactor_modules: &[Module]) -> Result<Self> {
        debug!("includes={:?}", raw.includes);
        debug!("excludes={:?}", raw.excludes);
        debug!("error_if_unknown_selector={:?}", raw.error_if_unknown_selector);
        debug!("include_root_module={:?}", raw.include_root_module);

        let error_flag = parse_flag(
            ERROR_IF_UNKNOWN_SELECTOR,
            raw.error_if_unknown_selector.as_deref(),
        );
        let root_flag = parse_flag(INCLUDE_ROOT_MODULE, raw.include_root_module.as_deref());
        let check_unknown = matches!(error_flag, Ok(true));

        let mut includes = resolve_selectors(
            INCLUDES,
            raw.includes.as_deref().unwrap_or_default(),
            check_unknown,
            reactor_modules,
        )?;
        if includes.is_empty() {
            includes.push(Selector::parse(INCLUDE_ALL, INCLUDES)?);
        }
        let excludes = resolve_selectors(
            EXCLUDES,
            raw.excludes.as_deref().unwrap_or_default(),
            check_unknown,
            reactor_modules,
        )?;

        let config = Self {
            include_patterns: compile_all(&includes)?,
            exclude_patterns: compile_all(&excludes)?,
            includes,
            excludes,
            error_if_unknown_selector: error_flag?,
            include_root_module: root_flag?,
        };
        debug!("resolved: {}", config);
        Ok(config)
    }

    /// Resolved include selectors; never empty.
    pub fn includes(&self) -> &[Selector] {
        &self.includes
    }

    /// Resolved exclude selectors.
    pub fn excludes(&self) -> &[Selector] {
        &self.excludes
    }

    pub fn error_if_unknown_selector(&self) -> bool {
        self.error_if_unknown_selector
    }

    pub fn include_root_module(&self) -> bool {
        self.include_root_module
    }

    /// Whether a module passes the include/exclude selectors.
    pub fn is_included(&self, module: &Module) -> bool {
        evaluator::is_included(&self.include_patterns, &self.exclude_patterns, module)
    }

    /// Stable rendering of the resolved configuration.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScopeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DependOnAll[includes=[{}];excludes=[{}];include_root_module={};error_if_unknown_selector={}]",
            join(&self.includes),
            join(&self.excludes),
            self.include_root_module,
            self.error_if_unknown_selector
        )
    }
}

fn join(selectors: &[Selector]) -> String {
    selectors
        .iter()
        .map(Selector::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn compile_all(selectors: &[Selector]) -> Result<Vec<MatchPattern>> {
    selectors.iter().map(Selector::compile).collect()
}

fn resolve_selectors(
    parameter: &str,
    raw: &[String],
    check_unknown: bool,
    reactor_modules: &[Module],
) -> Result<Vec<Selector>> {
    debug!("Parameter {}.len: {}", parameter, raw.len());
    let mut selectors = Vec::with_capacity(raw.len());
    for value in raw {
        debug!("Check {} '{}'", parameter, value);
        let selector = Selector::parse(value, parameter)?;
        // Wildcard selectors cannot be checked for existence.
        if check_unknown
            && !selector.has_wildcard()
            && !selector_matches_any_module(reactor_modules, &selector)
        {
            return Err(RuleError::UnknownSelector {
                parameter: parameter.to_string(),
                selector: value.clone(),
            });
        }
        selectors.push(selector);
    }
    Ok(selectors)
}
