//! Writing the bundled document tree to the target directory.
//!
//! The copier assumes the guard has already run: the target path does not
//! exist when it is invoked. It recreates the bundle's relative structure
//! exactly, byte for byte.

use crate::assets::RuleDocument;
use crate::error::{InstallerError, Result};
use camino::Utf8Path;
use log::debug;
use std::fs;

/// Install every bundled document under `target`, preserving relative
/// structure, and return the number of documents written.
///
/// The emptiness check runs before any filesystem mutation, so a misbuilt
/// package never leaves a partial target behind. A filesystem error partway
/// through the copy is fatal and the partially written target is left as-is
/// for the user to inspect; a forced re-run replaces it wholesale.
///
/// # Errors
///
/// Returns [`InstallerError::SourceMissing`] when `documents` is empty, or
/// an I/O error if the target tree cannot be created or written.
pub fn install_documents(documents: &[RuleDocument], target: &Utf8Path) -> Result<usize> {
    if documents.is_empty() {
        return Err(InstallerError::SourceMissing {
            reason: "the embedded document manifest is empty".to_owned(),
        });
    }

    fs::create_dir_all(target)?;

    for document in documents {
        let destination = target.join(document.relative_path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&destination, document.contents)?;
        debug!("installed {destination}");
    }

    Ok(documents.len())
}
