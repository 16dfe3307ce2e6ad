use std::path::Path;

use crate::domain::{AppError, Kind, Settings, names};
use crate::ports::ProjectFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem> {
    filesystem: F,
    settings: Settings,
}

impl<F: ProjectFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F, settings: Settings) -> Self {
        Self { filesystem, settings }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        self.settings.root()
    }

    /// The given project name, or the configured default, validated.
    pub fn project_or_default<'a>(&'a self, project: Option<&'a str>) -> Result<&'a str, AppError> {
        let name = project.unwrap_or(&self.settings.projects.default_name);
        names::validate_segment("project", name)
    }

    /// The given kind, or the configured default.
    pub fn kind_or_default(&self, kind: Option<Kind>) -> Kind {
        kind.unwrap_or(self.settings.work_files.default_kind)
    }
}
