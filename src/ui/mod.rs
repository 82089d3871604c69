//! Terminal output and interactive prompts.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for `--yes`/CI environments
//!
//! The trait keeps command implementations testable: tests drive them with
//! a recording implementation instead of a real terminal.

pub mod non_interactive;
pub mod output;
pub mod terminal;

pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;

use crate::error::Result;

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Select one item from a list; returns the chosen index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Create the appropriate UI for the environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
