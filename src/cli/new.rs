//! New command handler.
//!
//! Implements the `new` subcommand: acquire a project config from a file or
//! the interactive form, select its template, then materialize the project.

use crate::config::{load_config_file, to_yaml, ProjectConfig};
use crate::interactive::{build_interactively, Prompter};
use crate::materialize::{project_destination, Materializer};
use crate::template::{TemplateCatalog, TemplateRef};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Where the project config of one invocation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    /// Every field is read from a YAML file
    File(PathBuf),
    /// Missing fields are asked for, starting from this partial config
    Interactive(ProjectConfig),
}

impl Acquisition {
    /// Pick the acquisition path from the command arguments.
    ///
    /// A positional project name cannot be combined with a config file.
    pub fn from_args(name: Option<String>, config_file: Option<PathBuf>) -> Result<Self> {
        match (name, config_file) {
            (Some(_), Some(_)) => {
                bail!("Passing a project name alongside a config file is not compatible")
            }
            (None, Some(path)) => Ok(Self::File(path)),
            (Some(name), None) => Ok(Self::Interactive(ProjectConfig::with_project_name(name))),
            (None, None) => Ok(Self::Interactive(ProjectConfig::default())),
        }
    }

    /// Run the chosen path; the prompter is only used interactively.
    pub fn acquire(self, prompter: &mut dyn Prompter) -> crate::Result<ProjectConfig> {
        match self {
            Self::File(path) => {
                tracing::debug!("Loading project config from {}", path.display());
                load_config_file(&path)
            }
            Self::Interactive(partial) => {
                tracing::debug!("Collecting project config interactively");
                build_interactively(partial, prompter)
            }
        }
    }
}

/// Options of the `new` command.
#[derive(Debug, Clone)]
pub struct NewOptions {
    pub acquisition: Acquisition,
    /// Directory the project directory is created in
    pub parent_dir: PathBuf,
    pub catalog: TemplateCatalog,
    /// Stop after selecting the template
    pub dry_run: bool,
    /// Do not print the config summary
    pub quiet: bool,
}

/// What a `new` run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOutcome {
    pub config: ProjectConfig,
    pub template: TemplateRef,
    pub destination: PathBuf,
    /// Whether the template was actually fetched
    pub materialized: bool,
}

/// Run the new command
pub fn run_new(
    options: NewOptions,
    prompter: &mut dyn Prompter,
    materializer: &dyn Materializer,
    out: &mut dyn Write,
) -> Result<NewOutcome> {
    let config = options.acquisition.acquire(prompter)?;

    if !options.quiet {
        let yaml = to_yaml(&config)?;
        writeln!(out, "{yaml}").context("failed to write config summary")?;
    }

    let template = options.catalog.select(&config)?;
    if !options.quiet {
        writeln!(out, "Selected template: {template}").context("failed to write template")?;
    }

    let destination = project_destination(&options.parent_dir, &config.project_name)?;
    if options.dry_run {
        tracing::info!("Dry run: not creating {}", destination.display());
        return Ok(NewOutcome {
            config,
            template,
            destination,
            materialized: false,
        });
    }

    materializer
        .materialize(&template, &destination)
        .with_context(|| format!("failed to create project '{}'", config.project_name))?;

    Ok(NewOutcome {
        config,
        template,
        destination,
        materialized: true,
    })
}
