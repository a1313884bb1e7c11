//! Unified error type for wge-cli.
//!
//! Every failure in the acquisition → selection → materialization pipeline is
//! terminal for the invocation, so a single flat enum is enough. Each variant
//! carries the offending path, field or value needed for a one-line diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wge-cli operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WgeError {
    /// The config file path does not exist
    #[error("Config file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The config file exists but could not be read
    #[error("Config file could not be read: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the config model
    #[error("Config file could not be deserialized: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required field is present but empty (or absent)
    #[error("Field '{0}' in config file is empty")]
    MissingField(&'static str),

    /// The interactive input channel failed or was interrupted
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Geometry type outside the closed `2D` / `3D` set
    #[error("Unknown geometry type '{0}' (expected one of: 2D, 3D)")]
    UnknownGeometry(String),

    /// Config could not be rendered back to YAML
    #[error("YAML serialization failed")]
    Serialize(#[source] serde_yaml::Error),

    /// JSON Schema could not be rendered
    #[error("JSON Schema serialization failed")]
    Schema(#[source] serde_json::Error),

    /// The project name cannot be used as a directory name under the parent
    #[error("Project name '{name}' must be a single directory name")]
    InvalidProjectName { name: String },

    /// The project directory is already taken
    #[error("Destination '{}' already exists and is not an empty directory", path.display())]
    DestinationExists { path: PathBuf },

    /// Cloning the template repository failed
    #[error("Git clone of {url} failed")]
    Clone {
        url: String,
        #[source]
        source: git2::Error,
    },
}

/// Convenient Result type for wge-cli operations
pub type Result<T> = std::result::Result<T, WgeError>;

impl WgeError {
    /// Create a prompt failure from any displayable cause
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Whether this error came from the interactive input channel
    #[must_use]
    pub const fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt { .. })
    }
}

impl From<inquire::InquireError> for WgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::prompt("interrupted"),
            other => Self::prompt(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = WgeError::MissingField("geometryType");
        assert_eq!(err.to_string(), "Field 'geometryType' in config file is empty");
    }

    #[test]
    fn unknown_geometry_lists_valid_values() {
        let err = WgeError::UnknownGeometry("4D".to_string());
        assert!(err.to_string().contains("'4D'"));
        assert!(err.to_string().contains("2D, 3D"));
    }

    #[test]
    fn inquire_interrupt_becomes_prompt_failure() {
        let err: WgeError = inquire::InquireError::OperationInterrupted.into();
        assert!(err.is_prompt());
        assert_eq!(err.to_string(), "Prompt failed: interrupted");
    }

    #[test]
    fn not_found_shows_path() {
        let err = WgeError::NotFound {
            path: PathBuf::from("missing.yaml"),
        };
        assert_eq!(err.to_string(), "Config file does not exist: missing.yaml");
    }
}
