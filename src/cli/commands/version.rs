//! Version command implementation.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand;

impl VersionCommand {
    /// Create a new version command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("devstrap");
        ui.message(&format!("Version:    {}", env!("CARGO_PKG_VERSION")));
        ui.message(&format!(
            "Commit:     {}",
            option_env!("DEVSTRAP_BUILD_COMMIT").unwrap_or("unknown")
        ));
        ui.message(&format!(
            "Build date: {}",
            option_env!("DEVSTRAP_BUILD_DATE").unwrap_or("unknown")
        ));
        ui.message(&format!(
            "OS/Arch:    {}/{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ));

        let catalog = Catalog::standard();
        ui.message("");
        ui.message("Supported tools:");
        ui.message(&format!(
            "  essential:    {}",
            joined(catalog.essentials().map(|t| t.label))
        ));
        ui.message(&format!(
            "  cloud-devops: {}",
            joined(catalog.cloud_devops().map(|t| t.label))
        ));

        ui.message("");
        ui.message("Supported platforms:");
        for platform in Platform::ALL {
            ui.message(&format!("  {}", platform.label()));
        }

        Ok(CommandResult::success())
    }
}

fn joined<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}
