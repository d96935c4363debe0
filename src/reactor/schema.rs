//! Reactor description file format.
//!
//! These structs map one-to-one onto the YAML/JSON file. Coordinates may be
//! omitted where a file-level default exists; [`crate::reactor::Reactor`]
//! fills them in.

use serde::{Deserialize, Serialize};

use crate::scope::RawScopeParams;

/// Root of a reactor description file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactorFile {
    /// Default group for modules and dependencies that omit one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Default version for modules and dependencies that omit one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Reference to the root module of the build, e.g. `com.acme:root`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level: Option<String>,

    /// Modules in build order.
    pub modules: Vec<ModuleEntry>,
}

/// One module entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    pub artifact: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Packaging type; `jar` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,

    /// Declared dependencies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyEntry>,

    /// Rule parameters; presence means the rule is configured for this module.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depend_on_all: Option<RawScopeParams>,
}

/// One declared dependency entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    pub artifact: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Dependency type; `jar` when omitted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dep_type: Option<String>,
}
