use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for projdeck operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A user-supplied name is not a single path component.
    #[error("Invalid {what} name '{name}': must be a single non-empty path component")]
    InvalidName { what: &'static str, name: String },

    /// Asset/shot kind is invalid.
    #[error("Invalid kind '{0}': must be one of Asset, Shot")]
    InvalidKind(String),

    /// Project directory does not exist under the root.
    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    /// Resolved work file does not exist.
    #[error("No such file: {}", .0.display())]
    WorkFileNotFound(PathBuf),

    /// Entry listing is empty for a project that exists.
    #[error("No {kind} entries in {}", .path.display())]
    NoEntries { kind: crate::domain::Kind, path: PathBuf },

    /// Entry holds no work files.
    #[error("No {extension} files in {}", .path.display())]
    NoWorkFiles { extension: &'static str, path: PathBuf },

    /// Something other than a directory occupies a project folder path.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Bump would leave the path as it is.
    #[error("Bumping '{0}' leaves it unchanged")]
    UnchangedVersion(String),

    /// Path carries no `_vNN` token.
    #[error("No version token (_vNN) in '{0}'")]
    NoVersionToken(String),

    /// Refusing to overwrite an existing file.
    #[error("Target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    /// Interactive prompt failed.
    #[error("{0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ConfigParse(_)
            | AppError::InvalidName { .. }
            | AppError::InvalidKind(_)
            | AppError::NoVersionToken(_)
            | AppError::UnchangedVersion(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectNotFound(_)
            | AppError::WorkFileNotFound(_)
            | AppError::NoEntries { .. }
            | AppError::NoWorkFiles { .. } => io::ErrorKind::NotFound,
            AppError::TargetExists(_) | AppError::NotADirectory(_) => io::ErrorKind::AlreadyExists,
            AppError::Serialization(_) | AppError::Interaction(_) => io::ErrorKind::Other,
        }
    }
}
