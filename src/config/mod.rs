//! Project configuration for wge-cli.
//!
//! This module provides:
//! - The [`ProjectConfig`] model and its typed [`GeometryType`] view
//! - Field presence and project-name validation shared by both acquisition paths
//! - YAML config file loading, example generation and JSON Schema export
//!
//! # Configuration File
//!
//! ```yaml
//! projectName: "spacewar"
//! geometryType: "3D"
//! ```
//!
//! ```rust,ignore
//! use wge_cli::config::load_config_file;
//!
//! let config = load_config_file(Path::new("spacewar.yaml"))?;
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{GeometryType, ProjectConfig};
pub use validation::{
    validate_project_name, Validatable, PROJECT_NAME_TOO_SHORT, REQUIRED_FIELDS,
};

pub use file::{generate_example_config, generate_json_schema, load_config_file, to_yaml};
