//! Reactor description discovery and loading.
//!
//! A project describes its reactor in one file at the project root:
//! `reactor.yml`, `reactor.yaml`, or `reactor.json`, checked in that order.

use crate::error::{Result, RuleError};
use crate::reactor::schema::ReactorFile;
use crate::reactor::Reactor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed at the project root, in priority order.
pub const REACTOR_FILE_NAMES: [&str; 3] = ["reactor.yml", "reactor.yaml", "reactor.json"];

/// Location of the reactor description for a project.
#[derive(Debug, Clone)]
pub struct ReactorPaths {
    /// Directory the search started from.
    pub project_root: PathBuf,

    /// The first description file found, if any.
    pub reactor: Option<PathBuf>,
}

impl ReactorPaths {
    /// Discover the reactor description under `project_root`.
    pub fn discover(project_root: &Path) -> Self {
        let reactor = REACTOR_FILE_NAMES
            .iter()
            .map(|name| project_root.join(name))
            .find(|path| path.is_file());

        Self {
            project_root: project_root.to_path_buf(),
            reactor,
        }
    }

    /// The discovered path, or the default path when nothing was found.
    pub fn expected(&self) -> PathBuf {
        self.reactor
            .clone()
            .unwrap_or_else(|| self.project_root.join(REACTOR_FILE_NAMES[0]))
    }
}

/// Load and parse a single description file.
///
/// # Errors
///
/// Returns `ReactorNotFound` if the file doesn't exist.
/// Returns `ReactorParseError` if the content is invalid.
pub fn load_reactor_file(path: &Path) -> Result<ReactorFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RuleError::ReactorNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RuleError::Io(e)
        }
    })?;

    parse_reactor(&content, path)
}

/// Parse description content.
///
/// Files ending in `.json` are read as JSON; everything else as YAML.
///
/// # Arguments
///
/// * `content` - The file content to parse
/// * `source_path` - Path for format detection and error reporting
pub fn parse_reactor(content: &str, source_path: &Path) -> Result<ReactorFile> {
    let is_json = source_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| RuleError::ReactorParseError {
        path: source_path.to_path_buf(),
        message,
    })
}

/// Locate, parse, and validate the reactor for a project.
///
/// `explicit` wins over discovery when given.
///
/// # Errors
///
/// Returns `ReactorNotFound` if no description exists.
/// Returns `ReactorParseError` or `ReactorValidationError` for bad content.
pub fn load_reactor(project_root: &Path, explicit: Option<&Path>) -> Result<Reactor> {
    let path = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_root.join(path),
        None => ReactorPaths::discover(project_root).expected(),
    };

    debug!("Loading reactor from {}", path.display());
    let file = load_reactor_file(&path)?;
    let reactor = Reactor::from_file(file)?;
    debug!("Reactor has {} module(s)", reactor.modules().len());
    Ok(reactor)
}
