//! Interactive config acquisition.
//!
//! [`build_interactively`] fills in a [`ProjectConfig`] one field at a time,
//! validating each answer before accepting it. Input comes from a
//! [`Prompter`], so the same flow runs against a terminal, piped stdin, or a
//! script in tests.

mod line;
mod scripted;
mod terminal;

pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use crate::config::{validate_project_name, GeometryType, ProjectConfig};
use crate::error::{Result, WgeError};

/// Label of the project name prompt.
pub const PROJECT_NAME_LABEL: &str = "What is your project named?";

/// Label of the geometry prompt.
pub const GEOMETRY_LABEL: &str = "What type of geometry do you want to use?";

/// Source of user answers for the interactive flow.
///
/// Every method blocks until an answer is available. A failing or
/// interrupted input channel is reported as [`WgeError::Prompt`].
pub trait Prompter {
    /// Ask for one line of free text.
    fn input(&mut self, label: &str) -> Result<String>;

    /// Ask the user to pick one of `items`, returning its index.
    fn select(&mut self, label: &str, items: &[&str]) -> Result<usize>;

    /// Tell the user why the previous answer was refused.
    fn reject(&mut self, message: &str) -> Result<()>;
}

/// Complete `partial` by asking for whatever is still needed.
///
/// A non-empty pre-supplied project name is kept as is and its prompt
/// skipped; the length rule only applies to typed answers. The geometry is
/// always asked for.
pub fn build_interactively(
    mut partial: ProjectConfig,
    prompter: &mut dyn Prompter,
) -> Result<ProjectConfig> {
    if partial.project_name.is_empty() {
        partial.project_name = ask_project_name(prompter)?;
    } else {
        tracing::debug!("Using pre-supplied project name '{}'", partial.project_name);
    }

    partial.geometry_type = ask_geometry(prompter)?.as_str().to_string();

    tracing::debug!(
        project_name = %partial.project_name,
        geometry_type = %partial.geometry_type,
        "Interactive config complete"
    );
    Ok(partial)
}

fn ask_project_name(prompter: &mut dyn Prompter) -> Result<String> {
    loop {
        let answer = prompter.input(PROJECT_NAME_LABEL)?;
        match validate_project_name(&answer) {
            Ok(()) => return Ok(answer),
            Err(reason) => {
                tracing::debug!("Rejected project name {answer:?}: {reason}");
                prompter.reject(reason)?;
            }
        }
    }
}

fn ask_geometry(prompter: &mut dyn Prompter) -> Result<GeometryType> {
    let labels = GeometryType::labels();
    let index = prompter.select(GEOMETRY_LABEL, &labels)?;
    GeometryType::ALL
        .get(index)
        .copied()
        .ok_or_else(|| WgeError::prompt(format!("selection {index} is out of range")))
}
