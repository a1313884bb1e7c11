//! Template selection.
//!
//! Maps a complete [`ProjectConfig`] to the location of the template
//! repository it should be scaffolded from. Selection is pure: the same
//! geometry always yields the same [`TemplateRef`].

use crate::config::{GeometryType, ProjectConfig};
use crate::error::Result;
use std::fmt;
use std::path::Path;

/// Default location prefix of the official WGE templates.
pub const DEFAULT_TEMPLATE_BASE: &str = "github.com/iWas-Coder";

/// Location of a template repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateRef {
    location: String,
}

impl TemplateRef {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// The location as selected, e.g. `github.com/iWas-Coder/wge-3d-game-template`.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// URL to clone from.
    ///
    /// Locations without a scheme are fetched over HTTPS; URLs with a scheme
    /// and absolute local paths are used as they are.
    #[must_use]
    pub fn clone_url(&self) -> String {
        if self.location.contains("://") || Path::new(&self.location).is_absolute() {
            self.location.clone()
        } else {
            format!("https://{}", self.location)
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}

/// Repository name of the template for each geometry.
#[must_use]
pub const fn template_name(geometry: GeometryType) -> &'static str {
    match geometry {
        GeometryType::TwoD => "wge-2d-game-template",
        GeometryType::ThreeD => "wge-3d-game-template",
    }
}

/// Set of templates living under a common location prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    base: String,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_BASE)
    }
}

impl TemplateCatalog {
    /// Create a catalog rooted at `base`; trailing slashes are ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Template for a geometry.
    #[must_use]
    pub fn template_for(&self, geometry: GeometryType) -> TemplateRef {
        TemplateRef::new(format!("{}/{}", self.base, template_name(geometry)))
    }

    /// Template for a config.
    ///
    /// Fails with [`WgeError::UnknownGeometry`](crate::error::WgeError::UnknownGeometry)
    /// instead of producing a partial location.
    pub fn select(&self, config: &ProjectConfig) -> Result<TemplateRef> {
        let template = self.template_for(config.geometry()?);
        tracing::info!("Selected template: {template}");
        Ok(template)
    }
}

/// Select a template from the default catalog.
pub fn select_template(config: &ProjectConfig) -> Result<TemplateRef> {
    TemplateCatalog::default().select(config)
}
