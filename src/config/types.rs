//! Configuration types for project scaffolding.
//!
//! [`ProjectConfig`] is the single entity the pipeline passes around. The
//! geometry is stored as a string so that a present-but-empty value is
//! reported as a missing field; [`GeometryType`] is its typed view.

use crate::error::{Result, WgeError};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Project Configuration
// ============================================================================

/// Parameters of the project to scaffold.
///
/// Field names map to `projectName` / `geometryType` in config files. Absent
/// keys and null values deserialize as empty strings; unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name of the project; also the name of the directory it is created in
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub project_name: String,
    /// Geometry dimensionality of the template: `2D` or `3D`
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub geometry_type: String,
}

/// `~`, `null` and a blank value all read as an empty field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProjectConfig {
    /// Create a complete config.
    pub fn new(project_name: impl Into<String>, geometry: GeometryType) -> Self {
        Self {
            project_name: project_name.into(),
            geometry_type: geometry.as_str().to_string(),
        }
    }

    /// Create a partial config that only carries a project name.
    pub fn with_project_name(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Typed geometry of this config.
    pub fn geometry(&self) -> Result<GeometryType> {
        self.geometry_type.parse()
    }
}

// ============================================================================
// Geometry Type
// ============================================================================

/// Closed set of geometry dimensionalities a template can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// Flat, sprite-based games
    TwoD,
    /// Full 3D scenes
    ThreeD,
}

impl GeometryType {
    /// All geometry types, in the order they are offered to the user.
    pub const ALL: [Self; 2] = [Self::TwoD, Self::ThreeD];

    /// External label, as written in config files and prompts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeD => "3D",
        }
    }

    /// Labels of [`GeometryType::ALL`].
    #[must_use]
    pub fn labels() -> [&'static str; 2] {
        Self::ALL.map(Self::as_str)
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = WgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| WgeError::UnknownGeometry(s.to_string()))
    }
}
