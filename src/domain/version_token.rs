//! `_vNN` version tokens embedded in work-file names.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_v([0-9]+)").expect("version token pattern is valid"));

/// Read the version carried by the first `_vNN` token, if any.
///
/// Returns `None` when there is no token or its digits do not fit in an `i64`.
pub fn current_version(path: &str) -> Option<i64> {
    let captures = VERSION_TOKEN.captures(path)?;
    captures[1].parse::<i64>().ok()
}

/// Whether the path carries at least one `_vNN` token.
pub fn has_version_token(path: &str) -> bool {
    VERSION_TOKEN.is_match(path)
}

/// Bump the version token in `path` by `increment`.
///
/// The first `_vNN` token supplies the current number. Every token in the
/// string is then rewritten to the new number, zero-padded to two digits.
/// Only ASCII `0-9` count as version digits, so `_v٣` or `_v３` is not a
/// token. Paths without a token come back unchanged.
pub fn bump(path: &str, increment: i64) -> String {
    let Some(current) = current_version(path) else {
        if has_version_token(path) {
            tracing::warn!(path, "version token too large to bump; leaving path unchanged");
        }
        return path.to_string();
    };
    let Some(next) = current.checked_add(increment) else {
        tracing::warn!(path, increment, "version bump overflows; leaving path unchanged");
        return path.to_string();
    };

    let token = format!("_v{:02}", next);
    VERSION_TOKEN.replace_all(path, NoExpand(&token)).into_owned()
}
