//! Post-install reporting.
//!
//! The report stage is purely observational: it walks the populated target
//! and counts documentation files. It never mutates the filesystem and never
//! originates a pipeline failure of its own.

use crate::error::Result;
use camino::{Utf8Path, Utf8PathBuf};

/// File extension that identifies a convention document.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Summary of a successful installation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Resolved target path the documents were installed to.
    pub target: Utf8PathBuf,
    /// Number of documentation files found by walking the target.
    pub installed_count: usize,
}

/// Walk the installed target and produce an [`InstallReport`].
///
/// The count is taken from the filesystem, not from the manifest, so it
/// reflects what was actually written.
///
/// # Errors
///
/// Returns an error if the target tree cannot be read.
pub fn generate_report(target: &Utf8Path) -> Result<InstallReport> {
    let installed_count = count_documents(target)?;
    Ok(InstallReport {
        target: target.to_owned(),
        installed_count,
    })
}

/// Recursively count files carrying [`DOCUMENT_EXTENSION`] under `dir`.
fn count_documents(dir: &Utf8Path) -> Result<usize> {
    let mut count = 0;
    for entry in dir.read_dir_utf8()? {
        let dir_entry = entry?;
        let path = dir_entry.path();
        if path.is_dir() {
            count += count_documents(path)?;
        } else if path.extension() == Some(DOCUMENT_EXTENSION) {
            count += 1;
        }
    }
    Ok(count)
}
