//! Create a project tree under the project root.

use crate::app::AppContext;
use crate::app::services::{MaterializeReport, materialize};
use crate::domain::{AppError, names};
use crate::ports::ProjectFilesystem;

pub fn execute<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    project: &str,
) -> Result<MaterializeReport, AppError> {
    let project = names::validate_segment("project", project)?;
    tracing::debug!(project, root = %ctx.root().display(), "create project");
    materialize(ctx.filesystem(), ctx.root(), project)
}
