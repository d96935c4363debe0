//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::scope::RawScopeParams;

/// depend-on-all - Check that modules depend on every project in the build.
#[derive(Debug, Parser)]
#[command(name = "depend-on-all")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the reactor description (overrides discovery of reactor.yml)
    #[arg(short, long, global = true)]
    pub reactor: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check declared dependencies against the reactor (default if no command specified)
    Check(CheckArgs),

    /// Show the resolved rule configuration
    Describe(TargetArgs),

    /// List the in-scope modules without checking dependencies
    Scope(TargetArgs),

    /// Print the JSON Schema of the reactor description
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Rule parameter overrides.
///
/// Values given here replace the ones from the reactor description.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RuleArgs {
    /// Selector for modules in scope (repeatable, comma-separated)
    #[arg(long = "include", value_name = "SELECTOR", value_delimiter = ',')]
    pub includes: Vec<String>,

    /// Selector for modules taken out of scope (repeatable, comma-separated)
    #[arg(long = "exclude", value_name = "SELECTOR", value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Fail when a selector without wildcards matches no module
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        env = "DEPEND_ON_ALL_ERROR_IF_UNKNOWN_SELECTOR"
    )]
    pub error_if_unknown_selector: Option<String>,

    /// Keep the top-level module in scope
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        env = "DEPEND_ON_ALL_INCLUDE_ROOT_MODULE"
    )]
    pub include_root_module: Option<String>,
}

impl RuleArgs {
    /// Overrides to merge over the parameters from the reactor description.
    ///
    /// Flag values are passed through unparsed so they are validated with
    /// the same messages as values from the file.
    pub fn to_overrides(&self) -> RawScopeParams {
        RawScopeParams {
            includes: non_empty(&self.includes),
            excludes: non_empty(&self.excludes),
            error_if_unknown_selector: self.error_if_unknown_selector.clone(),
            include_root_module: self.include_root_module.clone(),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Which modules to evaluate, and with which parameters.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Module to check: artifact, group:artifact, or group:artifact:packaging (repeatable)
    #[arg(short, long = "module", value_name = "MODULE")]
    pub modules: Vec<String>,

    #[command(flatten)]
    pub rule: RuleArgs,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
