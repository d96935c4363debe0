//! Reactor modules and declared dependency records.
//!
//! A [`Module`] is one participant of a multi-module build. Each module
//! carries the [`Dependency`] records it declares. Identity comparisons are
//! strict: every coordinate must match exactly, with no normalization.

use serde::Serialize;
use std::fmt;

/// Packaging type assumed when none is given.
pub const DEFAULT_PACKAGING: &str = "jar";

/// One declared dependency edge of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Group of the dependency.
    pub group: String,
    /// Artifact name of the dependency.
    pub artifact: String,
    /// Version of the dependency.
    pub version: String,
    /// Dependency type (the packaging type of the target module).
    #[serde(rename = "type")]
    pub dep_type: String,
}

impl Dependency {
    /// Create a new dependency record.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        dep_type: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            dep_type: dep_type.into(),
        }
    }
}

/// One module participating in the reactor.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Group the module belongs to.
    pub group: String,
    /// Artifact name, unique within the group.
    pub artifact: String,
    /// Module version.
    pub version: String,
    /// Packaging type, e.g. `jar`, `pom`, `war`.
    pub packaging: String,
    /// Dependencies the module declares directly.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

impl Module {
    /// Create a module without dependencies.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        packaging: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            packaging: packaging.into(),
            dependencies: Vec::new(),
        }
    }

    /// Add a declared dependency.
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Dependencies this module declares.
    pub fn declared_dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// The `group:artifact:packaging` string used for selector matching.
    pub fn canonical_id(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.packaging)
    }

    /// The `group:artifact` pair used in messages.
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Project this module into the dependency record that would point at it.
    pub fn to_dependency(&self) -> Dependency {
        Dependency::new(
            self.group.clone(),
            self.artifact.clone(),
            self.version.clone(),
            self.packaging.clone(),
        )
    }

    /// Whether `dependencies` contains a record pointing at this module.
    pub fn is_declared_in(&self, dependencies: &[Dependency]) -> bool {
        let wanted = self.to_dependency();
        dependencies.iter().any(|d| dependency_equal(d, &wanted))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group, self.artifact, self.version, self.packaging
        )
    }
}

/// Strict identity equality between two modules.
///
/// Group, artifact, version, and packaging must all match exactly.
/// Declared dependencies are not part of a module's identity.
pub fn modules_equal(a: &Module, b: &Module) -> bool {
    a.group == b.group
        && a.artifact == b.artifact
        && a.version == b.version
        && a.packaging == b.packaging
}

/// Strict equality between two dependency records.
pub fn dependency_equal(a: &Dependency, b: &Dependency) -> bool {
    a.group == b.group
        && a.artifact == b.artifact
        && a.version == b.version
        && a.dep_type == b.dep_type
}
