//! Target path resolution.
//!
//! Pure path computation: nothing here touches the filesystem, and any
//! string is a syntactically valid path at this stage.

use camino::{Utf8Path, Utf8PathBuf};

/// Default installation directory, relative to the project root.
pub const DEFAULT_TARGET_DIR: &str = "docs/conventions";

/// Resolve a user-supplied target path against the project base directory.
///
/// An absolute path is returned unchanged; a relative path is joined onto
/// `base`.
#[must_use]
pub fn resolve_target(base: &Utf8Path, option: &Utf8Path) -> Utf8PathBuf {
    if option.is_absolute() {
        option.to_owned()
    } else {
        base.join(option)
    }
}

/// Resolve the effective target from an optional CLI value.
///
/// Falls back to [`DEFAULT_TARGET_DIR`] when no path was supplied.
#[must_use]
pub fn effective_target(base: &Utf8Path, option: Option<&Utf8Path>) -> Utf8PathBuf {
    resolve_target(base, option.unwrap_or_else(|| Utf8Path::new(DEFAULT_TARGET_DIR)))
}
