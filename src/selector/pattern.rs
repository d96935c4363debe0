//! Selector-to-pattern compilation.
//!
//! A selector is turned into an anchored regular expression over the
//! canonical `group:artifact:packaging` id of a module. Literal text is
//! escaped and every `*` becomes a match-any-sequence token.

use regex::Regex;

use crate::error::{Result, RuleError};

/// The regex token a `*` expands to.
const ANY_SEQUENCE: &str = ".*";

/// Number of segments in a canonical module id.
const ID_SEGMENTS: usize = 3;

/// A compiled selector, matched against whole canonical ids.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: String,
    regex: Regex,
}

impl MatchPattern {
    /// Whether `canonical_id` matches the pattern as a whole string.
    pub fn is_match(&self, canonical_id: &str) -> bool {
        self.regex.is_match(canonical_id)
    }

    /// The unanchored pattern text, e.g. `.*:core:.*`.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Translate a selector into its pattern text.
///
/// A bare token is an artifact selector: `core` becomes `.*:core:.*`.
/// Selectors with fewer than three segments are padded on the right, so
/// `org.apache:core` becomes `org\.apache:core:.*`.
pub fn pattern_text(selector: &str) -> String {
    let mut text = selector
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(ANY_SEQUENCE);

    if !text.contains(':') {
        text = format!("{ANY_SEQUENCE}:{text}:{ANY_SEQUENCE}");
    }

    let mut segments = text.split(':').count();
    while segments < ID_SEGMENTS {
        text.push(':');
        text.push_str(ANY_SEQUENCE);
        segments += 1;
    }

    text
}

/// Compile a selector into a [`MatchPattern`].
pub fn compile(selector: &str) -> Result<MatchPattern> {
    let source = pattern_text(selector);
    let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
        RuleError::Other(anyhow::anyhow!(
            "selector '{}' could not be compiled: {}",
            selector,
            e
        ))
    })?;
    Ok(MatchPattern { source, regex })
}
