//! Non-interactive UI for `--yes` and CI environments.
//!
//! Prompts are never shown: confirmations resolve to their default and
//! menu selection is an error, since there is no user to choose.

use anyhow::anyhow;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Plain-output implementation without prompts.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn print(&self, line: &str) {
        if self.mode.shows_status() {
            println!("{}", line);
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.print(msg);
    }

    fn success(&mut self, msg: &str) {
        self.print(&format!("ok: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.print(&format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        self.print(&format!("== {} ==", title));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!("auto-answering '{question}' with {default}");
        Ok(default)
    }

    fn select(&mut self, prompt: &str, _items: &[String]) -> Result<usize> {
        Err(anyhow!("cannot prompt '{prompt}' in non-interactive mode").into())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
