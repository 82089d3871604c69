//! Interactive terminal UI on console + dialoguer.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{DevstrapError, Result};

use super::{OutputMode, UserInterface};

/// Convert dialoguer errors to DevstrapError.
fn map_dialoguer_err(e: dialoguer::Error) -> DevstrapError {
    DevstrapError::Io(e.into())
}

/// Interactive terminal implementation.
pub struct TerminalUI {
    mode: OutputMode,
    term: Term,
}

impl TerminalUI {
    /// Create a terminal UI writing to stdout.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            term: Term::stdout(),
        }
    }

    fn print(&self, line: &str) {
        if self.mode.shows_status() {
            let _ = self.term.write_line(line);
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.print(msg);
    }

    fn success(&mut self, msg: &str) {
        self.print(&format!("{} {}", style("✓").green().bold(), msg));
    }

    fn warning(&mut self, msg: &str) {
        self.print(&format!("{} {}", style("!").yellow().bold(), msg));
    }

    fn error(&mut self, msg: &str) {
        // Errors bypass the output mode; they always reach the terminal.
        let _ = self
            .term
            .write_line(&format!("{} {}", style("✗").red().bold(), msg));
    }

    fn show_header(&mut self, title: &str) {
        self.print(&format!("\n{}", style(title).cyan().bold()));
        self.print(&style("─".repeat(title.chars().count())).dim().to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
