//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use depend_on_all::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking com.acme:root");
//! ui.error("Invalid reactor");
//!
//! assert!(ui.has_message("com.acme:root"));
//! assert!(ui.has_error("Invalid reactor"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures everything regardless of output mode, so tests can assert on
/// what a command tried to show.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    emitted: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all text written with `emit`.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All emitted text joined with newlines.
    pub fn emitted_text(&self) -> String {
        self.emitted.join("\n")
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if any success message contains the given text.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push(text.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
