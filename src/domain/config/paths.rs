use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "projdeck.toml";

/// `<dir>/projdeck.toml`
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}
