//! Installation procedure model.
//!
//! A procedure is the ordered sequence of shell commands that installs one
//! tool on one platform. Steps are typed as critical or best-effort so the
//! executor can abort on real failures while letting cleanup steps fail
//! quietly.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::platform::Platform;

/// Whether a step failure aborts the procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Non-zero exit aborts the remaining steps and fails the procedure.
    Critical,
    /// Non-zero exit is logged and skipped (cleanup of downloaded artifacts).
    BestEffort,
}

/// One external command invocation within a procedure.
#[derive(Debug, Clone)]
pub struct Step {
    /// Human-readable description, carried into step-failure errors.
    pub description: String,

    /// Command line, run through the user's shell.
    pub command: String,

    /// Abort-on-failure classification.
    pub kind: StepKind,
}

impl Step {
    /// A step whose failure aborts the procedure.
    pub fn critical(description: &str, command: &str) -> Self {
        Self {
            description: description.to_string(),
            command: command.to_string(),
            kind: StepKind::Critical,
        }
    }

    /// A step whose failure is logged but never fails the procedure.
    pub fn best_effort(description: &str, command: &str) -> Self {
        Self {
            description: description.to_string(),
            command: command.to_string(),
            kind: StepKind::BestEffort,
        }
    }
}

/// Ordered steps installing one tool on one platform.
#[derive(Debug, Clone)]
pub struct Procedure {
    /// Tool identifier this procedure installs.
    pub tool: String,

    /// Platform the steps target.
    pub platform: Platform,

    /// Steps in execution order.
    pub steps: Vec<Step>,
}

/// Two-dimensional lookup table: (tool id, platform) → procedure.
///
/// Built once at startup rather than discovered at call time, so gaps are
/// a validation result instead of a runtime surprise.
pub struct ProcedureTable {
    procedures: HashMap<(String, Platform), Procedure>,
}

impl ProcedureTable {
    /// Build an empty table.
    pub fn new() -> Self {
        Self {
            procedures: HashMap::new(),
        }
    }

    /// Insert a procedure, keyed by its own (tool, platform) pair.
    pub fn insert(&mut self, procedure: Procedure) {
        self.procedures
            .insert((procedure.tool.clone(), procedure.platform), procedure);
    }

    /// Look up the procedure for a (tool, platform) pair.
    pub fn get(&self, tool: &str, platform: Platform) -> Option<&Procedure> {
        self.procedures.get(&(tool.to_string(), platform))
    }

    /// Report (tool, platform) pairs that have no procedure.
    ///
    /// The standard table covers the full catalog on every platform; this
    /// exists so a synthetic or trimmed table surfaces its gaps at startup.
    pub fn validate(&self, catalog: &Catalog) -> Vec<(String, Platform)> {
        let mut gaps = Vec::new();
        for tool in catalog.tools() {
            for platform in Platform::ALL {
                if self.get(tool.id, platform).is_none() {
                    gaps.push((tool.id.to_string(), platform));
                }
            }
        }
        gaps
    }
}

impl Default for ProcedureTable {
    fn default() -> Self {
        Self::new()
    }
}
