//! Settings loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::config::paths;
use crate::domain::{AppError, Settings, parse_settings_content};

/// Load settings.
///
/// An explicit path must exist. Without one, `projdeck.toml` in `cwd` is
/// used when present, and built-in defaults otherwise.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = paths::settings_file(cwd);
            if !candidate.is_file() {
                tracing::debug!("no {} found; using defaults", paths::SETTINGS_FILE);
                return Ok(Settings::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading settings");
    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
}
