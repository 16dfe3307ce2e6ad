//! Prepare the project render output directory.

use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::layout;
use crate::ports::ProjectFilesystem;

/// Render output location for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub path: PathBuf,
    /// `path` with a trailing separator, as render output settings expect.
    pub output_path: String,
    pub created: bool,
}

pub fn execute<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    project: Option<&str>,
) -> Result<RenderTarget, AppError> {
    let project = ctx.project_or_default(project)?;
    let path = layout::render_path(ctx.root(), project);
    tracing::debug!(path = %path.display(), "prepare render path");

    let created = !ctx.filesystem().exists(&path);
    if created {
        ctx.filesystem().create_dir_all(&path)?;
        tracing::info!(path = %path.display(), "created render directory");
    }

    let mut output_path = path.display().to_string();
    if !output_path.ends_with(MAIN_SEPARATOR) {
        output_path.push(MAIN_SEPARATOR);
    }
    Ok(RenderTarget { path, output_path, created })
}
