//! Schema command implementation.
//!
//! The `depend-on-all schema` command prints the JSON Schema of the
//! reactor description file.

use crate::error::{Result, RuleError};
use crate::reactor::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchemaCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let text =
            serde_json::to_string_pretty(&schema).map_err(|e| RuleError::Other(e.into()))?;
        ui.emit(&text);
        Ok(CommandResult::success())
    }
}
