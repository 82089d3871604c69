//! Installation dispatch, procedures, and batch orchestration.
//!
//! # Modules
//!
//! - [`procedure`] - Step/procedure model and the (tool × platform) table
//! - [`steps`] - The standard procedure table for the full catalog
//! - [`dispatcher`] - Idempotence short-circuit and fail-fast step executor
//! - [`orchestrator`] - Continue-on-error batch modes

pub mod dispatcher;
pub mod orchestrator;
pub mod procedure;
pub mod steps;

pub use dispatcher::{
    check_prerequisites, CommandRunner, Dispatcher, InstallOutcome, ShellRunner,
};
pub use orchestrator::Orchestrator;
pub use procedure::{Procedure, ProcedureTable, Step, StepKind};
pub use steps::standard_table;
