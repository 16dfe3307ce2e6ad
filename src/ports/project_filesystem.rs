//! Filesystem operations a project tree needs.
//!
//! This port owns no layout semantics; paths come fully resolved from
//! `domain::layout`. Listing never fails: a missing or unreadable directory
//! lists as empty.

use std::path::Path;

use crate::domain::AppError;

/// Port for project-tree filesystem operations.
pub trait ProjectFilesystem {
    /// Names of the immediate sub-directories of `path`, sorted.
    fn list_child_directories(&self, path: &Path) -> Vec<String>;

    /// Names of the immediate files in `path` ending with `extension`, sorted.
    fn list_files_with_extension(&self, path: &Path, extension: &str) -> Vec<String>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check whether `path` is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. No-op if present.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write `content` unless a file already exists at `path`.
    ///
    /// Returns `true` when the file was written.
    fn write_file_if_absent(&self, path: &Path, content: &str) -> Result<bool, AppError>;

    /// Copy a file. Fails if `to` already exists; a failed copy leaves no `to` behind.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;
}
