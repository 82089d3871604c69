//! Blocking shell-out primitives.
//!
//! Every invocation blocks the calling thread until the external process
//! exits. There is deliberately no timeout or cancellation: a hung package
//! manager hangs the whole CLI invocation, matching the strictly
//! sequential execution model.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{DevstrapError, Result};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Capture both streams.
    pub fn quiet() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
        }
    }

    /// Inherit both streams so the user sees package-manager output live.
    pub fn passthrough() -> Self {
        Self::default()
    }
}

/// Execute a command line through the user's shell.
///
/// Procedure steps include pipelines and `$(...)` substitutions (repository
/// registration one-liners), so commands always go through `$SHELL -c`
/// rather than direct argv execution.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(user_shell());
    cmd.arg("-c");
    cmd.arg(command);

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| DevstrapError::StepFailed {
        step: format!("spawn `{command}`: {e}"),
        code: None,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

fn user_shell() -> String {
    std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
}
