//! Materializing and scanning project trees.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::layout::{self, README_CONTENT, README_FILE};
use crate::ports::ProjectFilesystem;

/// What `materialize` did on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub project_path: PathBuf,
    /// The project directory was already present before the call.
    pub already_existed: bool,
    /// Standard sub-tree entries that did not exist before the call.
    pub created: Vec<&'static str>,
    /// The README placeholder was written by this call.
    pub readme_written: bool,
}

/// Create a project directory with the standard sub-tree and README.
///
/// Idempotent: existing directories are left alone and an existing README
/// keeps its content. A non-directory at the project path or at any sub-tree
/// entry fails with `NotADirectory`.
pub fn materialize<F: ProjectFilesystem>(
    fs: &F,
    root: &Path,
    project: &str,
) -> Result<MaterializeReport, AppError> {
    let project_path = layout::project_path(root, project);
    let already_existed = ensure_dir(fs, &project_path)?;

    let mut created = Vec::new();
    for entry in layout::standard_sub_tree() {
        if !ensure_dir(fs, &project_path.join(entry))? {
            created.push(*entry);
        }
    }

    let readme_written = fs.write_file_if_absent(&project_path.join(README_FILE), README_CONTENT)?;
    tracing::info!(
        project = %project_path.display(),
        created = created.len(),
        readme_written,
        "materialized project tree"
    );

    Ok(MaterializeReport { project_path, already_existed, created, readme_written })
}

/// Create `dir` unless it is already a directory. Returns whether it was.
fn ensure_dir<F: ProjectFilesystem>(fs: &F, dir: &Path) -> Result<bool, AppError> {
    if fs.is_dir(dir) {
        return Ok(true);
    }
    if fs.exists(dir) {
        return Err(AppError::NotADirectory(dir.to_path_buf()));
    }
    fs.create_dir_all(dir)?;
    Ok(false)
}
