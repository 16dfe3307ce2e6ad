//! Version-bump a work-file path, optionally copying the file forward.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::version_token;
use crate::ports::ProjectFilesystem;

/// Inputs for the bump command.
#[derive(Debug, Clone)]
pub struct BumpOptions {
    pub path: String,
    pub increment: i64,
    /// Copy the existing file to the bumped path.
    pub copy: bool,
}

/// Result of a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub bumped: String,
    pub copied: bool,
}

pub fn execute<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    options: &BumpOptions,
) -> Result<BumpOutcome, AppError> {
    let bumped = version_token::bump(&options.path, options.increment);
    tracing::debug!(from = %options.path, to = %bumped, "bump version");
    if !options.copy {
        return Ok(BumpOutcome { bumped, copied: false });
    }

    if !version_token::has_version_token(&options.path) {
        return Err(AppError::NoVersionToken(options.path.clone()));
    }
    if bumped == options.path {
        return Err(AppError::UnchangedVersion(options.path.clone()));
    }
    let source = PathBuf::from(&options.path);
    if !ctx.filesystem().is_file(&source) {
        return Err(AppError::WorkFileNotFound(source));
    }
    ctx.filesystem().copy_file(&source, &PathBuf::from(&bumped))?;
    tracing::info!(from = %options.path, to = %bumped, "copied work file to next version");
    Ok(BumpOutcome { bumped, copied: true })
}
