//! `ProjectFilesystem` implementation over `std::fs`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Project filesystem backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }

    /// Sorted names of entries in `path` accepted by `keep`.
    fn scan(&self, path: &Path, keep: impl Fn(&fs::DirEntry) -> bool) -> Vec<String> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "directory missing; listing empty");
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not list directory");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| keep(entry))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        tracing::debug!(path = %path.display(), count = names.len(), "scanned directory");
        names
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn list_child_directories(&self, path: &Path) -> Vec<String> {
        self.scan(path, |entry| entry.path().is_dir())
    }

    fn list_files_with_extension(&self, path: &Path, extension: &str) -> Vec<String> {
        self.scan(path, |entry| {
            entry.path().is_file() && entry.file_name().to_string_lossy().ends_with(extension)
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn write_file_if_absent(&self, path: &Path, content: &str) -> Result<bool, AppError> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(content.as_bytes())?;
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let mut source = File::open(from)?;
        let mut target = match OpenOptions::new().write(true).create_new(true).open(to) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(AppError::TargetExists(to.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };
        if let Err(err) = io::copy(&mut source, &mut target) {
            drop(target);
            if let Err(cleanup) = fs::remove_file(to) {
                tracing::warn!(
                    path = %to.display(),
                    error = %cleanup,
                    "could not remove partial copy"
                );
            }
            return Err(err.into());
        }
        Ok(())
    }
}
