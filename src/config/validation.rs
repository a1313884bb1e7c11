//! Configuration validation for wge-cli.
//!
//! The file loader checks presence of every field after parsing; the
//! interactive builder checks each answer before accepting it. Both rules
//! live here so the two acquisition paths share them.

use super::types::ProjectConfig;
use crate::error::{Result, WgeError};

/// Message shown when an entered project name is too short.
pub const PROJECT_NAME_TOO_SHORT: &str = "Project name must have more than 1 character";

type FieldAccessor = fn(&ProjectConfig) -> &str;

fn project_name(config: &ProjectConfig) -> &str {
    &config.project_name
}

fn geometry_type(config: &ProjectConfig) -> &str {
    &config.geometry_type
}

/// Every field of [`ProjectConfig`] with its external name, in declared order.
///
/// Adding a field to the config means adding a row here.
pub const REQUIRED_FIELDS: &[(&str, FieldAccessor)] = &[
    ("projectName", project_name),
    ("geometryType", geometry_type),
];

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for configs whose fields must all be filled in.
pub trait Validatable {
    /// External names of every empty field, in declared order.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Fail with the first empty field, if any.
    fn ensure_present(&self) -> Result<()> {
        match self.missing_fields().first().copied() {
            Some(field) => Err(WgeError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Check if every field is present.
    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl Validatable for ProjectConfig {
    fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .filter(|(_, value)| value(self).is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Check a project name entered by the user.
///
/// Length is counted in characters, not bytes.
pub fn validate_project_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.chars().count() <= 1 {
        return Err(PROJECT_NAME_TOO_SHORT);
    }
    Ok(())
}
