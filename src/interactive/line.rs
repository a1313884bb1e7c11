use std::io::{BufRead, Write};

use super::Prompter;
use crate::error::{Result, WgeError};

/// Line-oriented prompter for non-interactive input such as piped stdin.
///
/// Prompts are written to `output`, answers are read one line at a time from
/// `input`. A selection is answered with its 1-based number or its exact
/// text. End of input is a prompt failure.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text} ")
            .and_then(|()| self.output.flush())
            .map_err(|e| WgeError::prompt(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| WgeError::prompt(e.to_string()))?;
        if read == 0 {
            return Err(WgeError::prompt("input closed before an answer was given"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| WgeError::prompt(e.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, label: &str) -> Result<String> {
        self.ask(label)
    }

    fn select(&mut self, label: &str, items: &[&str]) -> Result<usize> {
        self.say(label)?;
        for (i, item) in items.iter().enumerate() {
            self.say(&format!("  {}) {item}", i + 1))?;
        }
        loop {
            let answer = self.ask(&format!("Choose 1-{}:", items.len()))?;
            let answer = answer.trim();
            if let Some(index) = parse_choice(answer, items) {
                return Ok(index);
            }
            self.reject(&format!(
                "'{answer}' is not one of: {}",
                items.join(", ")
            ))?;
        }
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        self.say(&format!("✗ {message}"))
    }
}

fn parse_choice(answer: &str, items: &[&str]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=items.len()).contains(&number).then(|| number - 1);
    }
    items.iter().position(|item| *item == answer)
}
