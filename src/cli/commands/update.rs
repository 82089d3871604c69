//! Update command implementation.
//!
//! Prints upgrade guidance only; devstrap does not replace its own binary.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand;

impl UpdateCommand {
    /// Create a new update command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for UpdateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!(
            "Current version: {}",
            env!("CARGO_PKG_VERSION")
        ));
        ui.message("To upgrade, grab the latest release:");
        ui.message("  https://github.com/devstrap/devstrap/releases");
        ui.message("or re-run the install script:");
        ui.message("  curl -sSL https://raw.githubusercontent.com/devstrap/devstrap/main/install.sh | bash");
        Ok(CommandResult::success())
    }
}
