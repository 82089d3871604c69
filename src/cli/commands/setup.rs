//! Setup command implementation.
//!
//! `devstrap setup` drives batch installation: either one of the fixed
//! batches (`--type essentials|cloud-devops|all`) or the interactive menu
//! loop. `--yes` forces the full batch without prompting.

use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{Catalog, ToolDescriptor};
use crate::cli::args::{SetupArgs, SetupType};
use crate::config::Settings;
use crate::error::{DevstrapError, Result};
use crate::installer::{
    check_prerequisites, standard_table, Dispatcher, InstallOutcome, Orchestrator,
};
use crate::platform::{self, Platform};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    args: SetupArgs,
    settings: Settings,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(args: SetupArgs, settings: Settings) -> Self {
        Self { args, settings }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui, platform::is_elevated)
    }
}

impl SetupCommand {
    /// [`Command::execute`] with an injected elevation check.
    fn run(&self, ui: &mut dyn UserInterface, elevated: impl Fn() -> bool) -> Result<CommandResult> {
        if elevated() {
            return Err(DevstrapError::PrivilegeViolation);
        }

        let detected = platform::detect()?;
        ui.show_header("devstrap setup");
        ui.message(&format!("Detected platform: {}", detected.label()));

        check_prerequisites(detected)?;

        let catalog = Catalog::standard();
        let table = standard_table(&catalog);
        let runner = super::install::runner_for(ui, &self.settings);
        let dispatcher = Dispatcher::new(&catalog, &table, &runner);
        let orchestrator = Orchestrator::new(&dispatcher);

        if self.settings.yes {
            ui.warning("Running unattended setup (all tools)");
            install_all_with_progress(&catalog, &orchestrator, detected, ui);
            return Ok(CommandResult::success());
        }

        match self.args.setup_type {
            SetupType::Interactive => {
                self.run_menu_loop(&catalog, &dispatcher, &orchestrator, detected, ui)
            }
            SetupType::Essentials => {
                ui.message("Installing essential tools...");
                orchestrator.install_essentials(detected, &mut report_to(ui));
                Ok(CommandResult::success())
            }
            SetupType::CloudDevops => {
                ui.message("Installing cloud & DevOps tools...");
                orchestrator.install_cloud_devops(detected, &mut report_to(ui));
                Ok(CommandResult::success())
            }
            SetupType::All => {
                ui.message("Installing all tools...");
                install_all_with_progress(&catalog, &orchestrator, detected, ui);
                Ok(CommandResult::success())
            }
        }
    }
}

impl SetupCommand {
    fn run_menu_loop(
        &self,
        catalog: &Catalog,
        dispatcher: &Dispatcher<'_>,
        orchestrator: &Orchestrator<'_>,
        detected: Platform,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let menu: Vec<String> = vec![
            "Essential tools (Docker, Git, net-tools)".into(),
            "Cloud & DevOps tools (Terraform, AWS CLI, kubectl, ...)".into(),
            "All tools".into(),
            "Install a single tool".into(),
            "Exit".into(),
        ];

        loop {
            match ui.select("Setup DevOps tools", &menu)? {
                0 => {
                    ui.message("Installing essential tools...");
                    orchestrator.install_essentials(detected, &mut report_to(ui));
                }
                1 => {
                    ui.message("Installing cloud & DevOps tools...");
                    orchestrator.install_cloud_devops(detected, &mut report_to(ui));
                }
                2 => {
                    ui.message("Installing all tools...");
                    install_all_with_progress(catalog, orchestrator, detected, ui);
                }
                3 => self.run_single_tool_menu(catalog, dispatcher, detected, ui)?,
                _ => {
                    ui.success("Setup finished");
                    return Ok(CommandResult::success());
                }
            }
        }
    }

    fn run_single_tool_menu(
        &self,
        catalog: &Catalog,
        dispatcher: &Dispatcher<'_>,
        detected: Platform,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        loop {
            // Markers are re-probed each pass so a just-installed tool
            // shows up as present immediately.
            let mut items: Vec<String> = catalog
                .tools()
                .iter()
                .map(|tool| {
                    let marker = if catalog.is_installed(tool.id) { "✓" } else { "✗" };
                    format!("{} {}", marker, tool.label)
                })
                .collect();
            items.push("Back".into());

            let choice = ui.select("Install which tool?", &items)?;
            let Some(tool) = catalog.tools().get(choice) else {
                return Ok(());
            };

            ui.message(&format!("Installing {}...", tool.label));
            let outcome = dispatcher.install(tool.id, detected);
            report_outcome(ui, tool, &outcome);
        }
    }
}

/// Per-tool outcome reporting for batch observers.
fn report_to(ui: &mut dyn UserInterface) -> impl FnMut(&ToolDescriptor, &InstallOutcome) + '_ {
    move |tool, outcome| report_outcome(ui, tool, outcome)
}

fn report_outcome(ui: &mut dyn UserInterface, tool: &ToolDescriptor, outcome: &InstallOutcome) {
    match outcome {
        InstallOutcome::AlreadyInstalled => {
            ui.warning(&format!("{} is already installed", tool.label))
        }
        InstallOutcome::Succeeded => ui.success(&format!("{} installed", tool.label)),
        InstallOutcome::Failed(e) => ui.error(&format!("{}: {}", tool.label, e)),
    }
}

/// The full batch with an indicatif progress bar across the catalog.
fn install_all_with_progress(
    catalog: &Catalog,
    orchestrator: &Orchestrator<'_>,
    detected: Platform,
    ui: &mut dyn UserInterface,
) {
    let bar = ProgressBar::new(catalog.tools().len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    orchestrator.install_all(detected, &mut |tool, outcome| {
        bar.set_message(tool.label.to_string());
        bar.suspend(|| report_outcome(ui, tool, outcome));
        bar.inc(1);
    });

    bar.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::testing::SilentUI;

    #[test]
    fn elevated_invocation_fails_before_detection() {
        let cmd = SetupCommand::new(SetupArgs::default(), Settings::default());
        let mut ui = SilentUI;
        let err = cmd.run(&mut ui, || true).unwrap_err();
        assert!(matches!(err, DevstrapError::PrivilegeViolation));
    }
}
