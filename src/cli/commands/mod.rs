//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that evaluate the rule
//! share module selection through [`selection`].

pub mod check;
pub mod completions;
pub mod describe;
pub mod dispatcher;
pub mod schema;
pub mod scope;
pub mod selection;

pub use dispatcher::{
    Command, CommandDispatcher, CommandResult, EXIT_CONFIG_ERROR, EXIT_MISSING_DEPENDENCIES,
};
pub use selection::{select_targets, Target};
