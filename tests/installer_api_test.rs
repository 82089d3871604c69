//! Public-API tests for dispatch and batch orchestration.
//!
//! These exercise the installer through the crate's public surface with a
//! synthetic catalog and a scripted runner, the way an embedding caller
//! would drive it.

use std::cell::RefCell;
use std::time::Duration;

use devstrap::catalog::{Catalog, Category, ToolDescriptor};
use devstrap::installer::{
    CommandRunner, Dispatcher, InstallOutcome, Orchestrator, Procedure, ProcedureTable, Step,
};
use devstrap::platform::Platform;
use devstrap::shell::CommandResult;
use devstrap::{DevstrapError, Result};

/// Runner that records commands; anything containing `fail` exits 1.
struct ScriptedRunner {
    executed: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    fn new() -> Self {
        Self {
            executed: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.executed.borrow_mut().push(command.to_string());
        let success = !command.contains("fail");
        Ok(CommandResult {
            exit_code: Some(if success { 0 } else { 1 }),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success,
        })
    }
}

fn tool(id: &'static str, binaries: &'static [&'static str]) -> ToolDescriptor {
    ToolDescriptor {
        id,
        label: id,
        category: Category::Essential,
        binaries,
    }
}

#[test]
fn batch_reports_mixed_outcomes_in_registry_order() {
    // toolA is installed, toolB has a working procedure, toolC has no
    // procedure for the platform.
    let catalog = Catalog::from_tools(vec![
        tool("toolA", &["toolA"]),
        tool("toolB", &[]),
        tool("toolC", &[]),
    ]);

    let mut table = ProcedureTable::new();
    table.insert(Procedure {
        tool: "toolB".into(),
        platform: Platform::CentOs,
        steps: vec![Step::critical("Install toolB", "install-b")],
    });

    let runner = ScriptedRunner::new();
    let dispatcher =
        Dispatcher::new(&catalog, &table, &runner).with_probe(|binary| binary == "toolA");
    let orchestrator = Orchestrator::new(&dispatcher);

    let mut outcomes = Vec::new();
    orchestrator.install_all(Platform::CentOs, &mut |t, outcome| {
        let kind = match outcome {
            InstallOutcome::AlreadyInstalled => "already-installed",
            InstallOutcome::Succeeded => "succeeded",
            InstallOutcome::Failed(DevstrapError::UnsupportedCombination { .. }) => "unsupported",
            InstallOutcome::Failed(_) => "failed",
        };
        outcomes.push((t.id, kind));
    });

    assert_eq!(
        outcomes,
        [
            ("toolA", "already-installed"),
            ("toolB", "succeeded"),
            ("toolC", "unsupported"),
        ]
    );
}

#[test]
fn standard_table_has_a_procedure_for_every_pair() {
    let catalog = Catalog::standard();
    let table = devstrap::installer::standard_table(&catalog);
    assert!(table.validate(&catalog).is_empty());
}

#[test]
fn repeated_install_is_a_no_op_once_probe_reports_installed() {
    let catalog = Catalog::from_tools(vec![tool("widget", &["widget"])]);
    let mut table = ProcedureTable::new();
    table.insert(Procedure {
        tool: "widget".into(),
        platform: Platform::Ubuntu,
        steps: vec![Step::critical("Install widget", "install-widget")],
    });

    let runner = ScriptedRunner::new();
    let installed = RefCell::new(false);
    let dispatcher =
        Dispatcher::new(&catalog, &table, &runner).with_probe(|_| *installed.borrow());

    assert!(matches!(
        dispatcher.install("widget", Platform::Ubuntu),
        InstallOutcome::Succeeded
    ));

    // The install changed system state; the fresh probe now sees it.
    *installed.borrow_mut() = true;
    assert!(matches!(
        dispatcher.install("widget", Platform::Ubuntu),
        InstallOutcome::AlreadyInstalled
    ));
    assert_eq!(runner.executed.borrow().len(), 1);
}
