//! Error types for the Tenets installer CLI.
//!
//! This module defines semantic error variants that provide actionable
//! guidance when installation fails. Each error carries its remediation in
//! the message where one exists.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during the installation process.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The target directory already exists and `--force` was not given.
    ///
    /// Recoverable by the user: the existing directory is left untouched and
    /// the message names the flag that authorises replacement.
    #[error(
        "target directory {path} already exists; \
         re-run with --force to delete it and install a fresh copy"
    )]
    TargetExists {
        /// Path of the pre-existing target directory.
        path: Utf8PathBuf,
    },

    /// The bundled document tree is missing or empty.
    ///
    /// This indicates a corrupted or misbuilt package, not a user mistake.
    #[error("bundled convention documents are unavailable: {reason}")]
    SourceMissing {
        /// Description of the packaging defect.
        reason: String,
    },

    /// The project directory could not be determined.
    #[error("could not determine the project directory: {reason}")]
    ProjectDirUnavailable {
        /// Description of why resolution failed.
        reason: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to scan the target directory for installed documents.
    #[error("failed to scan installed documents")]
    ScanFailed {
        /// The underlying error that caused the scan to fail.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;
