//! Pure parse/validate for `projdeck.toml`.

use crate::domain::{AppError, Settings};

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
