//! Install command implementation.
//!
//! `devstrap install <tool>` installs one catalog tool. The privilege
//! check runs before anything else: the procedures call sudo themselves
//! where needed, and running the whole CLI as root would leave downloaded
//! artifacts and group membership wrong for the actual user.

use crate::catalog::Catalog;
use crate::cli::args::InstallArgs;
use crate::config::Settings;
use crate::error::{DevstrapError, Result};
use crate::installer::{
    check_prerequisites, standard_table, Dispatcher, InstallOutcome, ShellRunner,
};
use crate::platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
    settings: Settings,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs, settings: Settings) -> Self {
        Self { args, settings }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui, platform::is_elevated)
    }
}

impl InstallCommand {
    /// [`Command::execute`] with an injected elevation check.
    fn run(&self, ui: &mut dyn UserInterface, elevated: impl Fn() -> bool) -> Result<CommandResult> {
        if elevated() {
            return Err(DevstrapError::PrivilegeViolation);
        }

        let catalog = Catalog::standard();
        let tool = &self.args.tool;

        let Some(descriptor) = catalog.get(tool) else {
            ui.error(&format!("Unrecognized tool: {}", tool));
            ui.message("Available tools:");
            ui.message(&format!("  essential:    {}", joined_ids(catalog.essentials())));
            ui.message(&format!("  cloud-devops: {}", joined_ids(catalog.cloud_devops())));
            return Err(DevstrapError::UnrecognizedTool { tool: tool.clone() });
        };

        let detected = platform::detect()?;
        check_prerequisites(detected)?;

        if catalog.is_installed(tool) {
            ui.warning(&format!("{} is already installed", descriptor.label));
            return Ok(CommandResult::success());
        }

        let skip_prompt = self.settings.yes || !ui.is_interactive();
        if !skip_prompt {
            let question = format!("Install {} on {}?", descriptor.label, detected.label());
            if !ui.confirm(&question, true)? {
                ui.message("Installation cancelled");
                return Ok(CommandResult::success());
            }
        }

        ui.message(&format!("Installing {}...", descriptor.label));

        let table = standard_table(&catalog);
        let runner = runner_for(ui, &self.settings);
        let dispatcher = Dispatcher::new(&catalog, &table, &runner);

        match dispatcher.install(tool, detected) {
            InstallOutcome::Succeeded => {
                ui.success(&format!("{} installed successfully", descriptor.label));
                if tool == "docker" && detected != platform::Platform::MacOs {
                    ui.warning(
                        "Log out and back in for docker group membership to apply, \
                         or run: newgrp docker",
                    );
                }
                Ok(CommandResult::success())
            }
            InstallOutcome::AlreadyInstalled => {
                ui.warning(&format!("{} is already installed", descriptor.label));
                Ok(CommandResult::success())
            }
            InstallOutcome::Failed(e) => Err(e),
        }
    }
}

/// Pick a runner that matches the output mode.
pub(super) fn runner_for(ui: &dyn UserInterface, settings: &Settings) -> ShellRunner {
    if settings.verbose || ui.output_mode().shows_command_output() {
        ShellRunner::passthrough()
    } else {
        ShellRunner::quiet()
    }
}

fn joined_ids<'a>(tools: impl Iterator<Item = &'a crate::catalog::ToolDescriptor>) -> String {
    tools.map(|t| t.id).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::testing::SilentUI;

    fn command(tool: &str) -> InstallCommand {
        InstallCommand::new(
            InstallArgs {
                tool: tool.to_string(),
            },
            Settings::default(),
        )
    }

    #[test]
    fn elevated_invocation_fails_before_anything_else() {
        // Even an unknown tool id reports the privilege violation: the
        // root check precedes catalog validation and platform detection.
        let mut ui = SilentUI;
        let err = command("frobnicator").run(&mut ui, || true).unwrap_err();
        assert!(matches!(err, DevstrapError::PrivilegeViolation));
    }

    #[test]
    fn unknown_tool_is_rejected_when_unprivileged() {
        let mut ui = SilentUI;
        let err = command("frobnicator").run(&mut ui, || false).unwrap_err();
        assert!(matches!(err, DevstrapError::UnrecognizedTool { .. }));
    }
}
