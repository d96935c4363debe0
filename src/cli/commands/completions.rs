//! Shell completions generation.
//!
//! The `depend-on-all completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// Binary name completions are generated for.
const BIN_NAME: &str = "depend-on-all";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn generate(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = generate(Shell::Bash);
        assert!(output.contains("depend-on-all"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let output = generate(Shell::Zsh);
        assert!(output.contains("depend-on-all"));
    }

    #[test]
    fn completions_know_subcommands() {
        let output = generate(Shell::Fish);
        assert!(output.contains("describe"));
        assert!(output.contains("scope"));
    }
}
