//! Installer dispatch and procedure execution.
//!
//! The dispatcher owns the idempotence short-circuit and the fail-fast
//! executor. It is explicitly not idempotent at the step level: re-running
//! after a partial failure re-executes already-applied steps, which package
//! managers treat as no-ops. Nothing is retried and nothing is rolled back;
//! a partially registered repository stays registered.

use crate::catalog::{binary_on_path, Catalog};
use crate::error::{DevstrapError, Result};
use crate::platform::Platform;
use crate::shell::{self, CommandOptions, CommandResult};

use super::procedure::{ProcedureTable, Step, StepKind};

/// Per-tool result of one dispatch.
///
/// Ephemeral: produced once per [`Dispatcher::install`] call and consumed
/// only for reporting.
#[derive(Debug)]
pub enum InstallOutcome {
    /// The availability probe found the tool; nothing was executed.
    AlreadyInstalled,
    /// Every critical step exited zero.
    Succeeded,
    /// A critical step failed, or no procedure exists for the pair.
    Failed(DevstrapError),
}

impl InstallOutcome {
    /// Whether this outcome represents a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, InstallOutcome::Failed(_))
    }
}

/// Seam for executing procedure steps, substitutable in tests.
pub trait CommandRunner {
    /// Run one command line, blocking until it exits.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Runs steps through the user's shell.
pub struct ShellRunner {
    options: CommandOptions,
}

impl ShellRunner {
    /// Capture step output (normal mode).
    pub fn quiet() -> Self {
        Self {
            options: CommandOptions::quiet(),
        }
    }

    /// Let step output flow to the terminal (verbose mode).
    pub fn passthrough() -> Self {
        Self {
            options: CommandOptions::passthrough(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        shell::execute(command, &self.options)
    }
}

/// Selects and executes the platform-specific procedure for a tool.
pub struct Dispatcher<'a> {
    catalog: &'a Catalog,
    table: &'a ProcedureTable,
    runner: &'a dyn CommandRunner,
    on_path: Box<dyn Fn(&str) -> bool + 'a>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher probing the real PATH.
    pub fn new(
        catalog: &'a Catalog,
        table: &'a ProcedureTable,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            catalog,
            table,
            runner,
            on_path: Box::new(binary_on_path),
        }
    }

    /// Replace the PATH probe (synthetic environments in tests).
    pub fn with_probe(mut self, on_path: impl Fn(&str) -> bool + 'a) -> Self {
        self.on_path = Box::new(on_path);
        self
    }

    /// The catalog this dispatcher installs from.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Install one tool on the given platform.
    ///
    /// 1. Already installed → [`InstallOutcome::AlreadyInstalled`], no side
    ///    effects. The probe is evaluated fresh on every call.
    /// 2. No procedure for the pair → `Failed(UnsupportedCombination)`.
    /// 3. Otherwise execute the steps strictly sequentially; the first
    ///    failing critical step aborts the rest.
    pub fn install(&self, id: &str, platform: Platform) -> InstallOutcome {
        if self.catalog.is_installed_with(id, &self.on_path) {
            tracing::debug!("{id} already installed, skipping");
            return InstallOutcome::AlreadyInstalled;
        }

        let Some(procedure) = self.table.get(id, platform) else {
            return InstallOutcome::Failed(DevstrapError::UnsupportedCombination {
                tool: id.to_string(),
                platform: platform.to_string(),
            });
        };

        match self.run_steps(&procedure.steps) {
            Ok(()) => InstallOutcome::Succeeded,
            Err(e) => InstallOutcome::Failed(e),
        }
    }

    fn run_steps(&self, steps: &[Step]) -> Result<()> {
        for step in steps {
            tracing::debug!("running step: {}", step.description);
            let result = self.runner.run(&step.command);

            let failure = match result {
                Ok(r) if r.success => continue,
                Ok(r) => DevstrapError::StepFailed {
                    step: step.description.clone(),
                    code: r.exit_code,
                },
                Err(e) => e,
            };

            match step.kind {
                StepKind::Critical => return Err(failure),
                StepKind::BestEffort => {
                    tracing::warn!("best-effort step '{}' failed: {failure}", step.description);
                }
            }
        }
        Ok(())
    }
}

/// Verify the platform's bootstrap dependency before any procedure runs.
///
/// macOS procedures all go through Homebrew, and the Linux download steps
/// need curl; their absence is a fatal precondition reported up front, not
/// a mid-sequence discovery.
pub fn check_prerequisites(platform: Platform) -> Result<()> {
    check_prerequisites_with(platform, binary_on_path)
}

/// [`check_prerequisites`] with an injected PATH lookup.
pub fn check_prerequisites_with(
    platform: Platform,
    on_path: impl Fn(&str) -> bool,
) -> Result<()> {
    match platform {
        Platform::MacOs => {
            if !on_path("brew") {
                return Err(DevstrapError::UnmetPrerequisite {
                    prerequisite: "brew".into(),
                    message: "Homebrew is not installed. Install it first: https://brew.sh".into(),
                });
            }
        }
        Platform::Ubuntu | Platform::CentOs => {
            if !on_path("curl") {
                return Err(DevstrapError::UnmetPrerequisite {
                    prerequisite: "curl".into(),
                    message: "curl is not installed. Install it first: sudo apt-get install curl \
                              (Ubuntu) or sudo yum install curl (CentOS)"
                        .into(),
                });
            }
        }
    }
    Ok(())
}
