use super::AppError;

/// Checks that a user-supplied name is usable as one path component.
///
/// Checks:
/// - Non-empty after trimming
/// - No path separators (/, \) or NUL
/// - Not "." or ".."
///
/// Spaces and dots are allowed; project and shot names often carry them.
pub fn is_valid_segment(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return false;
    }
    if name.contains(['/', '\\', '\0']) {
        return false;
    }
    trimmed != "." && trimmed != ".."
}

/// Validate a name, returning it trimmed.
pub fn validate_segment<'a>(what: &'static str, name: &'a str) -> Result<&'a str, AppError> {
    if is_valid_segment(name) {
        Ok(name.trim())
    } else {
        Err(AppError::InvalidName { what, name: name.to_string() })
    }
}
