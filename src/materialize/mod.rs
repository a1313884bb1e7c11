//! Project materialization.
//!
//! Turns a [`TemplateRef`] into a local project directory. The clone is a
//! single blocking call with no retry; a destination that is already in use
//! is never overwritten.

use crate::error::{Result, WgeError};
use crate::template::TemplateRef;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Component, Path, PathBuf};

/// Fetches a template into a destination directory.
pub trait Materializer {
    /// Create `destination` from `template`.
    fn materialize(&self, template: &TemplateRef, destination: &Path) -> Result<()>;
}

/// Materializer that clones the template with libgit2.
#[derive(Debug, Clone, Default)]
pub struct GitMaterializer {
    show_progress: bool,
}

impl GitMaterializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a progress bar while objects are received.
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Materializer for GitMaterializer {
    fn materialize(&self, template: &TemplateRef, destination: &Path) -> Result<()> {
        ensure_destination_free(destination)?;

        let url = template.clone_url();
        tracing::info!("Cloning {url} into {}", destination.display());

        let progress = if self.show_progress {
            clone_progress_bar()
        } else {
            ProgressBar::hidden()
        };

        let mut callbacks = git2::RemoteCallbacks::new();
        let bar = progress.clone();
        callbacks.transfer_progress(move |stats| {
            bar.set_length(stats.total_objects() as u64);
            bar.set_position(stats.received_objects() as u64);
            true
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_options);

        let result = builder.clone(&url, destination);
        progress.finish_and_clear();

        result.map_err(|source| WgeError::Clone { url, source })?;
        tracing::info!("Project created at {}", destination.display());
        Ok(())
    }
}

/// Directory a project named `project_name` is created in.
///
/// The name must be one plain path component, so the project always lands
/// directly inside `parent`.
pub fn project_destination(parent: &Path, project_name: &str) -> Result<PathBuf> {
    let mut components = Path::new(project_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(parent.join(project_name)),
        _ => Err(WgeError::InvalidProjectName {
            name: project_name.to_string(),
        }),
    }
}

/// Fail if `destination` exists and is anything but an empty directory.
pub fn ensure_destination_free(destination: &Path) -> Result<()> {
    let taken = if destination.is_dir() {
        std::fs::read_dir(destination)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(true)
    } else {
        destination.exists()
    };

    if taken {
        return Err(WgeError::DestinationExists {
            path: destination.to_path_buf(),
        });
    }
    Ok(())
}

fn clone_progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("Receiving objects {bar:30.cyan/blue} {pos}/{len}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}
