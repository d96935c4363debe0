//! Module selectors.
//!
//! A selector identifies one or more reactor modules by
//! `[group:]artifact[:packaging]`. Any segment may contain the `*`
//! wildcard. Selectors are validated once by [`Selector::parse`] and then
//! compiled into a [`MatchPattern`] for scope evaluation.
//!
//! # Example
//!
//! ```
//! use depend_on_all::selector::Selector;
//!
//! let selector = Selector::parse("org.apache.*:*", "includes").unwrap();
//! assert!(selector.has_wildcard());
//!
//! let pattern = selector.compile().unwrap();
//! assert!(pattern.is_match("org.apache.maven:core:jar"));
//! ```

pub mod pattern;

pub use pattern::{compile, pattern_text, MatchPattern};

use std::fmt;

use crate::error::{Result, RuleError};
use crate::reactor::Module;

/// Wildcard character accepted in any selector segment.
pub const WILDCARD: char = '*';

/// Maximum number of `:`-delimited segments in a selector.
pub const MAX_SEGMENTS: usize = 3;

/// A validated module selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    raw: String,
}

impl Selector {
    /// Validate a raw selector string.
    ///
    /// `parameter` names the configuration parameter the selector came from
    /// and is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSelector` if the string is empty, whitespace-only,
    /// or has more than three segments.
    pub fn parse(raw: &str, parameter: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(RuleError::MalformedSelector {
                parameter: parameter.to_string(),
                message: "String is empty".to_string(),
            });
        }
        if raw.trim().is_empty() {
            return Err(RuleError::MalformedSelector {
                parameter: parameter.to_string(),
                message: format!("String contains only whitespace: '{}'", raw),
            });
        }
        if raw.split(':').count() > MAX_SEGMENTS {
            return Err(RuleError::MalformedSelector {
                parameter: parameter.to_string(),
                message: format!("String is invalid: '{}'", raw),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// The selector's original text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether any segment contains `*`.
    pub fn has_wildcard(&self) -> bool {
        self.raw.contains(WILDCARD)
    }

    /// The `:`-delimited segments.
    pub fn segments(&self) -> Vec<&str> {
        self.raw.split(':').collect()
    }

    /// Compile into a pattern over canonical module ids.
    pub fn compile(&self) -> Result<MatchPattern> {
        compile(&self.raw)
    }

    /// Exact segment comparison against a module, without pattern matching.
    ///
    /// One segment compares the artifact, two compare group and artifact,
    /// three also compare the packaging type. Only meaningful for selectors
    /// without wildcards: a `*` is compared literally.
    pub fn matches_exactly(&self, module: &Module) -> bool {
        match self.segments().as_slice() {
            [artifact] => module.artifact == *artifact,
            [group, artifact] => module.group == *group && module.artifact == *artifact,
            [group, artifact, packaging] => {
                module.group == *group
                    && module.artifact == *artifact
                    && module.packaging == *packaging
            }
            _ => false,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
