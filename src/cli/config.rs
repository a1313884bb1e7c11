//! Config command handlers.
//!
//! Implements the `config` subcommand, which documents the project config
//! file format.

use crate::config::{generate_example_config, generate_json_schema};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Print a commented example project config file
pub fn run_config_example(out: &mut dyn Write) -> Result<()> {
    out.write_all(generate_example_config().as_bytes())
        .context("failed to write example config")
}

/// Print the JSON Schema of the project config file, or write it to `output`
pub fn run_config_schema(output: Option<PathBuf>, out: &mut dyn Write) -> Result<()> {
    let schema = generate_json_schema()?;
    match output {
        Some(path) => {
            std::fs::write(&path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => {
            writeln!(out, "{schema}").context("failed to write schema")?;
        }
    }
    Ok(())
}
