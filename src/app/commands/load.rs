//! Resolve the work file the host should open.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::layout::{self, WORK_FILE_EXTENSION};
use crate::domain::{AppError, Kind, names};
use crate::ports::ProjectFilesystem;

/// Inputs for the load command.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub project: Option<String>,
    pub kind: Option<Kind>,
    pub entry: String,
    pub file: String,
}

/// Resolve the work-file path, failing with `WorkFileNotFound` if it is absent.
pub fn execute<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    options: &LoadOptions,
) -> Result<PathBuf, AppError> {
    let project = ctx.project_or_default(options.project.as_deref())?;
    let kind = ctx.kind_or_default(options.kind);
    let entry = names::validate_segment("entry", &options.entry)?;
    let file = names::validate_segment("file", &options.file)?;

    let path = layout::work_file_path(ctx.root(), project, kind, entry, file);
    tracing::debug!(path = %path.display(), "load work file");
    if !ctx.filesystem().is_file(&path) {
        return Err(AppError::WorkFileNotFound(path));
    }
    Ok(path)
}

/// Entries to choose from when none was given.
///
/// Fails with `ProjectNotFound` when the project directory is missing and
/// `NoEntries` when it exists but holds no entries of `kind`.
pub fn entry_choices<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    project: Option<&str>,
    kind: Option<Kind>,
) -> Result<Vec<String>, AppError> {
    let project = ctx.project_or_default(project)?;
    let kind = ctx.kind_or_default(kind);
    if !ctx.filesystem().is_dir(&layout::project_path(ctx.root(), project)) {
        return Err(AppError::ProjectNotFound(project.to_string()));
    }
    let path = layout::data_kind_path(ctx.root(), project, kind);
    let entries = ctx.filesystem().list_child_directories(&path);
    if entries.is_empty() {
        return Err(AppError::NoEntries { kind, path });
    }
    Ok(entries)
}

/// Work files to choose from when none was given; `NoWorkFiles` if the entry has none.
pub fn file_choices<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    project: Option<&str>,
    kind: Option<Kind>,
    entry: &str,
) -> Result<Vec<String>, AppError> {
    let project = ctx.project_or_default(project)?;
    let kind = ctx.kind_or_default(kind);
    let entry = names::validate_segment("entry", entry)?;
    let path = layout::entry_path(ctx.root(), project, kind, entry);
    let files = ctx.filesystem().list_files_with_extension(&path, WORK_FILE_EXTENSION);
    if files.is_empty() {
        return Err(AppError::NoWorkFiles { extension: WORK_FILE_EXTENSION, path });
    }
    Ok(files)
}
