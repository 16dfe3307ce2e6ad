//! Settings domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Kind, names};

/// Settings loaded from `projdeck.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Where projects live.
    #[serde(default)]
    pub projects: ProjectsConfig,
    /// Work-file defaults.
    #[serde(default)]
    pub work_files: WorkFilesConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.projects.validate()?;
        Ok(())
    }

    /// Replace the project root, e.g. from a `--root` flag.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.projects.root = root.into();
        self
    }

    pub fn root(&self) -> &std::path::Path {
        &self.projects.root
    }
}

/// Project registry configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Directory whose children are projects.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Project used when a command is not given one.
    #[serde(default = "default_project_name")]
    pub default_name: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self { root: default_root(), default_name: default_project_name() }
    }
}

impl ProjectsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.root.as_os_str().is_empty() {
            return Err(AppError::config_error("projects.root must not be empty"));
        }
        if !names::is_valid_segment(&self.default_name) {
            return Err(AppError::config_error(format!(
                "projects.default_name '{}' must be a single path component",
                self.default_name
            )));
        }
        Ok(())
    }
}

/// Work-file configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkFilesConfig {
    /// Kind used when a command is not given one.
    #[serde(default)]
    pub default_kind: Kind,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_project_name() -> String {
    "MyProject".to_string()
}
