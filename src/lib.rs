//! **Scaffold new games powered by the WGE engine.**
//!
//! `wge-cli` turns a project name and a geometry type into a fresh project,
//! cloned from the matching WGE game template repository.
//!
//! ## Core Concepts & Modules
//!
//! - **[`config`]**: The [`ProjectConfig`] model, its validation rules, and YAML
//!   config file loading.
//! - **[`interactive`]**: Builds a [`ProjectConfig`] by asking the user, one
//!   validated field at a time, through a [`Prompter`].
//! - **[`template`]**: Maps a complete config to the [`TemplateRef`] it should be
//!   scaffolded from.
//! - **[`materialize`]**: Clones a template into the new project directory.
//! - **[`cli`]**: Command handlers used by the `wge-cli` binary.
//!
//! Exactly one acquisition path (file or interactive) runs per invocation, and
//! only a complete config ever reaches template selection.
//!
//! ## Loading a Config File
//!
//! ```no_run
//! use std::path::Path;
//! use wge_cli::{load_config_file, select_template};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_file(Path::new("spacewar.yaml"))?;
//!     let template = select_template(&config)?;
//!
//!     println!("'{}' will be created from {}", config.project_name, template);
//!     Ok(())
//! }
//! ```
//!
//! ## Scripting the Interactive Form
//!
//! ```
//! use wge_cli::interactive::{build_interactively, ScriptedPrompter};
//! use wge_cli::ProjectConfig;
//!
//! let mut prompter = ScriptedPrompter::new()
//!     .with_inputs(["spacewar"])
//!     .with_selections([1]);
//! let config = build_interactively(ProjectConfig::default(), &mut prompter).unwrap();
//!
//! assert_eq!(config.geometry_type, "3D");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod materialize;
pub mod template;

// Re-export main types for convenience
pub use config::{load_config_file, GeometryType, ProjectConfig, Validatable};
pub use error::{Result, WgeError};
pub use interactive::{build_interactively, Prompter};
pub use materialize::{GitMaterializer, Materializer};
pub use template::{select_template, TemplateCatalog, TemplateRef};
