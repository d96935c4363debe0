//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code when at least one module misses dependencies.
pub const EXIT_MISSING_DEPENDENCIES: i32 = 1;

/// Exit code for configuration and reactor errors.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    reactor: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            reactor: None,
        }
    }

    /// Use an explicit reactor description instead of discovery.
    pub fn with_reactor(mut self, reactor: Option<PathBuf>) -> Self {
        self.reactor = reactor;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reactor = self.reactor.as_deref();
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.project_root, reactor, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Describe(args)) => {
                let cmd =
                    super::describe::DescribeCommand::new(&self.project_root, reactor, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Scope(args)) => {
                let cmd = super::scope::ScopeCommand::new(&self.project_root, reactor, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to check with default args
                let cmd =
                    super::check::CheckCommand::new(&self.project_root, reactor, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
