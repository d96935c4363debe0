//! Scope selection over the reactor.
//!
//! This module decides which reactor modules the current module must
//! depend on:
//! - Raw and resolved rule parameters in [`config`]
//! - Include/exclude evaluation of a single module in [`evaluator`]
//! - Build-order scanning of the reactor in [`scanner`]

pub mod config;
pub mod evaluator;
pub mod scanner;

pub use config::{
    parse_flag, RawScopeParams, ScopeConfig, ERROR_IF_UNKNOWN_SELECTOR, EXCLUDES,
    INCLUDES, INCLUDE_ALL, INCLUDE_ROOT_MODULE,
};
pub use evaluator::is_included;
pub use scanner::{scope, selector_matches_any_module};
