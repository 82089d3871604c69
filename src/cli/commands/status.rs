//! Status command implementation.
//!
//! `devstrap status` reports the detected platform and the installed or
//! missing state of every catalog tool, grouped by category. The probes
//! run fresh on each invocation.

use serde_json::json;

use crate::catalog::{Catalog, Category, ToolDescriptor};
use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(args: StatusArgs) -> Self {
        Self { args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let info = platform::os_info()?;
        let catalog = Catalog::standard();

        let installed: Vec<bool> = catalog
            .tools()
            .iter()
            .map(|tool| catalog.is_installed(tool.id))
            .collect();
        let installed_count = installed.iter().filter(|i| **i).count();
        let total = catalog.tools().len();

        if self.args.json {
            let payload = json!({
                "platform": {
                    "id": info.platform.id(),
                    "label": info.platform.label(),
                    "arch": info.arch,
                    "version": info.version,
                },
                "tools": catalog
                    .tools()
                    .iter()
                    .zip(&installed)
                    .map(|(tool, present)| json!({
                        "id": tool.id,
                        "category": tool.category.to_string(),
                        "installed": present,
                    }))
                    .collect::<Vec<_>>(),
                "installed": installed_count,
                "total": total,
            });
            let rendered =
                serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
            return Ok(CommandResult::success());
        }

        ui.show_header("devstrap status");
        ui.message(&format!(
            "Platform: {} ({})",
            info.platform.label(),
            info.version.as_deref().unwrap_or("unknown version"),
        ));
        ui.message(&format!("Architecture: {}", info.arch));

        ui.message("");
        ui.message("Essential tools:");
        show_tools(ui, &catalog, Category::Essential);

        ui.message("");
        ui.message("Cloud & DevOps tools:");
        show_tools(ui, &catalog, Category::CloudDevOps);

        ui.message("");
        ui.message(&format!("{}/{} tools installed", installed_count, total));
        if installed_count == total {
            ui.success("Everything is installed");
        } else {
            ui.message("Run 'devstrap setup' to install the rest");
        }

        Ok(CommandResult::success())
    }
}

fn show_tools(ui: &mut dyn UserInterface, catalog: &Catalog, category: Category) {
    let tools: Vec<&ToolDescriptor> = catalog
        .tools()
        .iter()
        .filter(|t| t.category == category)
        .collect();

    for tool in tools {
        if catalog.is_installed(tool.id) {
            ui.success(&format!("  {}", tool.label));
        } else {
            ui.message(&format!("  ✗ {} (missing)", tool.label));
        }
    }
}
