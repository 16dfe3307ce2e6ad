//! Folder-scanning queries that feed choice lists.
//!
//! None of these fail on a missing directory; they list as empty.

use crate::app::AppContext;
use crate::domain::layout::{self, WORK_FILE_EXTENSION};
use crate::domain::{AppError, Kind, names};
use crate::ports::ProjectFilesystem;

/// Projects under the root.
pub fn projects<F: ProjectFilesystem>(ctx: &AppContext<F>) -> Vec<String> {
    tracing::debug!(root = %ctx.root().display(), "list projects");
    ctx.filesystem().list_child_directories(ctx.root())
}

/// Asset or shot entries of a project.
pub fn entries<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    project: Option<&str>,
    kind: Option<Kind>,
) -> Result<Vec<String>, AppError> {
    let project = ctx.project_or_default(project)?;
    let kind = ctx.kind_or_default(kind);
    let path = layout::data_kind_path(ctx.root(), project, kind);
    tracing::debug!(path = %path.display(), "list entries");
    Ok(ctx.filesystem().list_child_directories(&path))
}

/// Work files inside one entry.
pub fn work_files<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    project: Option<&str>,
    kind: Option<Kind>,
    entry: &str,
) -> Result<Vec<String>, AppError> {
    let project = ctx.project_or_default(project)?;
    let kind = ctx.kind_or_default(kind);
    let entry = names::validate_segment("entry", entry)?;
    let path = layout::entry_path(ctx.root(), project, kind, entry);
    tracing::debug!(path = %path.display(), "list work files");
    Ok(ctx.filesystem().list_files_with_extension(&path, WORK_FILE_EXTENSION))
}
