//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, Theme, UserInterface};

/// Terminal UI implementation.
///
/// Results go to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: Theme::for_colors(use_colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for a CLI invocation.
///
/// Colors are used only when allowed by `--no-color`, `NO_COLOR`, and a TTY stdout.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, !no_color && should_use_colors()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Verbose, true);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
