use inquire::{Select, Text};
use std::io::Write;

use super::Prompter;
use crate::error::{Result, WgeError};

/// Prompter backed by `inquire`, for interactive terminals.
///
/// Ctrl+C and Esc surface as prompt failures.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, label: &str) -> Result<String> {
        Ok(Text::new(label).prompt()?)
    }

    fn select(&mut self, label: &str, items: &[&str]) -> Result<usize> {
        let choice = Select::new(label, items.to_vec()).raw_prompt()?;
        Ok(choice.index)
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        writeln!(std::io::stderr(), "✗ {message}").map_err(|e| WgeError::prompt(e.to_string()))
    }
}
