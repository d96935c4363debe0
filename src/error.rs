//! Error types for rule evaluation.
//!
//! This module defines [`RuleError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RuleError` for configuration and reactor problems that abort an evaluation
//! - Missing dependencies are a finding, not an error; see [`crate::rule::Outcome`]
//! - Use `anyhow::Error` (via `RuleError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rule evaluation.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A selector is empty, whitespace-only, or has too many segments.
    #[error("Failure in parameter '{parameter}'. {message}")]
    MalformedSelector { parameter: String, message: String },

    /// A selector without wildcards matches nothing in the reactor.
    #[error("Failure in parameter '{parameter}'. Project '{selector}' not found in build")]
    UnknownSelector { parameter: String, selector: String },

    /// A boolean-like parameter is neither `true` nor `false`.
    #[error("Failure in parameter '{parameter}'. Must be 'true' or 'false': '{value}'")]
    MalformedFlag { parameter: String, value: String },

    /// Reactor description file not found at expected location.
    #[error("Reactor description not found: {path}")]
    ReactorNotFound { path: PathBuf },

    /// Failed to parse the reactor description file.
    #[error("Failed to parse reactor at {path}: {message}")]
    ReactorParseError { path: PathBuf, message: String },

    /// The reactor description parsed but is inconsistent.
    #[error("Invalid reactor: {message}")]
    ReactorValidationError { message: String },

    /// A module reference does not resolve to any reactor module.
    #[error("Unknown module: {reference}")]
    UnknownModule { reference: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
