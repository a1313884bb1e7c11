use std::collections::VecDeque;

use super::Prompter;
use crate::error::{Result, WgeError};

/// Prompter that replays queued answers.
///
/// Records every label it was asked and every rejection it was shown, so
/// callers can check which steps ran. Running out of answers fails like a
/// closed input channel.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    selections: VecDeque<usize>,
    asked: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue free-text answers, consumed in order.
    #[must_use]
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Queue selection indices, consumed in order.
    #[must_use]
    pub fn with_selections(mut self, selections: impl IntoIterator<Item = usize>) -> Self {
        self.selections.extend(selections);
        self
    }

    /// Labels of every prompt shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Every rejection message shown so far.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, label: &str) -> Result<String> {
        self.asked.push(label.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| WgeError::prompt(format!("no scripted answer for '{label}'")))
    }

    fn select(&mut self, label: &str, _items: &[&str]) -> Result<usize> {
        self.asked.push(label.to_string());
        self.selections
            .pop_front()
            .ok_or_else(|| WgeError::prompt(format!("no scripted selection for '{label}'")))
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        self.rejections.push(message.to_string());
        Ok(())
    }
}
