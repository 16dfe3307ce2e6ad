//! Path catalog for a project tree.
//!
//! Pure constructors: none of these touch the filesystem, and none validate
//! their segments. Commands validate user-supplied names before calling in.

use std::path::{Path, PathBuf};

use super::Kind;

/// Data directory under the project.
pub const DATA_DIR: &str = "01_Data";

/// Tool directory holding the Asset/Shot branches.
pub const TOOL_DIR: &str = "01_Blender";

/// Render output directory under the project.
pub const RENDER_DIR: &str = "Render";

/// Extension of work files managed by the host application.
pub const WORK_FILE_EXTENSION: &str = ".blend";

/// `<root>/<project>`
pub fn project_path(root: &Path, project: &str) -> PathBuf {
    root.join(project)
}

/// `<root>/<project>/01_Data/01_Blender/<kind>`
pub fn data_kind_path(root: &Path, project: &str, kind: Kind) -> PathBuf {
    project_path(root, project).join(DATA_DIR).join(TOOL_DIR).join(kind.dir_name())
}

/// `<root>/<project>/01_Data/01_Blender/<kind>/<entry>`
pub fn entry_path(root: &Path, project: &str, kind: Kind, entry: &str) -> PathBuf {
    data_kind_path(root, project, kind).join(entry)
}

/// `<root>/<project>/01_Data/01_Blender/<kind>/<entry>/<file>`
pub fn work_file_path(root: &Path, project: &str, kind: Kind, entry: &str, file: &str) -> PathBuf {
    entry_path(root, project, kind, entry).join(file)
}

/// `<root>/<project>/Render`
pub fn render_path(root: &Path, project: &str) -> PathBuf {
    project_path(root, project).join(RENDER_DIR)
}

/// File name the save command writes for an entry name.
pub fn work_file_name(name: &str) -> String {
    format!("{}{}", name, WORK_FILE_EXTENSION)
}
