//! Resolve where the host should save a work file.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::layout;
use crate::domain::{AppError, Kind, names};
use crate::ports::ProjectFilesystem;

/// Inputs for the save command.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    pub project: Option<String>,
    pub kind: Option<Kind>,
    /// Work-file name without extension.
    pub name: String,
    /// Entry directory; defaults to `name` when absent or blank.
    pub dir: Option<String>,
}

/// Resolved save location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub entry_path: PathBuf,
    pub work_file: PathBuf,
    pub entry_created: bool,
}

/// Create the entry directory if needed and return the work-file path.
pub fn execute<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    options: &SaveOptions,
) -> Result<SaveTarget, AppError> {
    let project = ctx.project_or_default(options.project.as_deref())?;
    let kind = ctx.kind_or_default(options.kind);
    let name = names::validate_segment("file", &options.name)?;
    let entry = match options.dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => names::validate_segment("entry", dir)?,
        _ => name,
    };
    tracing::debug!(project, %kind, entry, name, "save work file");

    let entry_path = layout::entry_path(ctx.root(), project, kind, entry);
    let entry_created = !ctx.filesystem().exists(&entry_path);
    if entry_created {
        ctx.filesystem().create_dir_all(&entry_path)?;
        tracing::info!(path = %entry_path.display(), "created entry directory");
    }

    let work_file = entry_path.join(layout::work_file_name(name));
    Ok(SaveTarget { entry_path, work_file, entry_created })
}
