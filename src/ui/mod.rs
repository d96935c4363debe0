//! User interface for command output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled output to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use depend_on_all::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("All modules depend on every in-scope project");
//! assert_eq!(ui.successes().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write text verbatim, regardless of output mode.
    ///
    /// Used for reports and other machine-consumable output.
    fn emit(&mut self, text: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
