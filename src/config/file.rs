//! Configuration file loading.
//!
//! Loads a [`ProjectConfig`] from a YAML file, then checks that every field is
//! filled in and that the geometry is one of the supported values.

use super::types::ProjectConfig;
use super::validation::Validatable;
use crate::error::{Result, WgeError};
use std::path::Path;

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Load a complete `ProjectConfig` from a YAML file.
///
/// Fails with, in order of the checks:
/// - [`WgeError::NotFound`] if `path` does not exist
/// - [`WgeError::Read`] if the file cannot be read
/// - [`WgeError::Parse`] on malformed YAML, mistyped values or unknown keys
/// - [`WgeError::MissingField`] naming the first empty field
/// - [`WgeError::UnknownGeometry`] if `geometryType` is not `2D` or `3D`
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        return Err(WgeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| WgeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let config: ProjectConfig =
        serde_yaml::from_slice(&bytes).map_err(|source| WgeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    config.ensure_present()?;
    config.geometry()?;

    tracing::debug!(
        project_name = %config.project_name,
        geometry_type = %config.geometry_type,
        "Loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Render a config in the config file format.
pub fn to_yaml(config: &ProjectConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(WgeError::Serialize)
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# WGE Project Configuration
# =========================
#
# Create a project from this file with:
#   wge-cli new --config <this file>

# Name of the project; the template is cloned into a directory of this name
projectName: "spacewar"

# Geometry of the game template: "2D" or "3D"
geometryType: "3D"
"#
    .to_string()
}

/// Generate a JSON Schema for the config file format.
///
/// Editors can use it for validation and autocompletion of project files.
pub fn generate_json_schema() -> Result<String> {
    let schema = schemars::schema_for!(ProjectConfig);
    serde_json::to_string_pretty(&schema).map_err(WgeError::Schema)
}

// ============================================================================
// Tests
// ============================================================================
