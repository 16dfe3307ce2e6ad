//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the local filesystem.

use std::path::{Path, PathBuf};

use crate::adapters::LocalFilesystem;
use crate::app::{
    AppContext,
    commands::{bump, create, list, load, render, save},
};
use crate::domain::{AppError, Kind, Settings};

pub use crate::app::commands::bump::{BumpOptions, BumpOutcome};
pub use crate::app::commands::load::LoadOptions;
pub use crate::app::commands::render::RenderTarget;
pub use crate::app::commands::save::{SaveOptions, SaveTarget};
pub use crate::app::services::MaterializeReport;

fn create_context(settings: &Settings) -> AppContext<LocalFilesystem> {
    AppContext::new(LocalFilesystem::new(), settings.clone())
}

/// Load settings from an explicit file, or `projdeck.toml` in the current directory.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, AppError> {
    crate::app::config::load_settings(explicit, &std::env::current_dir()?)
}

/// Create (or complete) a project tree under the configured root.
pub fn create_project(settings: &Settings, project: &str) -> Result<MaterializeReport, AppError> {
    create::execute(&create_context(settings), project)
}

/// Names of projects under the configured root.
pub fn list_projects(settings: &Settings) -> Vec<String> {
    list::projects(&create_context(settings))
}

/// Names of asset or shot entries in a project.
pub fn list_entries(
    settings: &Settings,
    project: Option<&str>,
    kind: Option<Kind>,
) -> Result<Vec<String>, AppError> {
    list::entries(&create_context(settings), project, kind)
}

/// Names of work files in an entry.
pub fn list_work_files(
    settings: &Settings,
    project: Option<&str>,
    kind: Option<Kind>,
    entry: &str,
) -> Result<Vec<String>, AppError> {
    list::work_files(&create_context(settings), project, kind, entry)
}

/// Resolve the save location for a work file, creating its entry directory.
pub fn prepare_save(settings: &Settings, options: &SaveOptions) -> Result<SaveTarget, AppError> {
    save::execute(&create_context(settings), options)
}

/// Resolve an existing work file to open.
pub fn resolve_load(settings: &Settings, options: &LoadOptions) -> Result<PathBuf, AppError> {
    load::execute(&create_context(settings), options)
}

/// Entries offered for `load` when none is given.
pub fn load_entry_choices(
    settings: &Settings,
    project: Option<&str>,
    kind: Option<Kind>,
) -> Result<Vec<String>, AppError> {
    load::entry_choices(&create_context(settings), project, kind)
}

/// Work files offered for `load` when none is given.
pub fn load_file_choices(
    settings: &Settings,
    project: Option<&str>,
    kind: Option<Kind>,
    entry: &str,
) -> Result<Vec<String>, AppError> {
    load::file_choices(&create_context(settings), project, kind, entry)
}

/// Ensure the project render directory exists and return it.
pub fn prepare_render_path(
    settings: &Settings,
    project: Option<&str>,
) -> Result<RenderTarget, AppError> {
    render::execute(&create_context(settings), project)
}

/// Bump the version token of a path, optionally copying the file forward.
pub fn bump_version(options: &BumpOptions) -> Result<BumpOutcome, AppError> {
    bump::execute(&create_context(&Settings::default()), options)
}
