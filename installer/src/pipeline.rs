//! Installation pipeline orchestration.
//!
//! Control flow is strictly linear: resolve, guard, copy, report. Any
//! failure while guarding or copying halts the run; reporting only ever
//! formats the outcome.

use crate::assets::RuleDocument;
use crate::copier::install_documents;
use crate::error::{InstallerError, Result};
use crate::guard::{TargetAction, decide_target_action, prepare_target};
use crate::output::{success_message, write_stderr_line};
use crate::report::{InstallReport, generate_report};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

/// Context for one installation run.
pub struct InstallContext<'a> {
    /// Resolved installation target.
    pub target: &'a Utf8Path,
    /// Whether an existing target may be replaced.
    pub force: bool,
    /// Suppress progress output.
    pub quiet: bool,
}

/// Run the guard, copy, and report stages against a resolved target.
///
/// Prints progress to stderr unless quiet mode is enabled.
///
/// # Errors
///
/// Returns [`InstallerError::TargetExists`] when the target exists without
/// `force`, [`InstallerError::SourceMissing`] for an empty bundle, or an
/// I/O error from the destructive replace or the copy itself.
pub fn run_install(
    context: &InstallContext<'_>,
    documents: &[RuleDocument],
    stderr: &mut dyn Write,
) -> Result<InstallReport> {
    let action = decide_target_action(context.target, context.force)?;

    if action == TargetAction::Replace && !context.quiet {
        write_stderr_line(
            stderr,
            format!("Replacing existing directory {}...", context.target),
        );
    }
    prepare_target(context.target, action)?;

    if !context.quiet {
        write_stderr_line(
            stderr,
            format!("Installing convention documents to {}...", context.target),
        );
    }
    install_documents(documents, context.target)?;

    let install_report = generate_report(context.target)?;

    if !context.quiet {
        write_stderr_line(stderr, "");
        write_stderr_line(
            stderr,
            success_message(install_report.installed_count, &install_report.target),
        );
    }

    Ok(install_report)
}

/// Determine the project directory the default target is resolved against.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or is not valid
/// UTF-8.
pub fn current_project_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|path| InstallerError::ProjectDirUnavailable {
        reason: format!("current directory {} is not valid UTF-8", path.display()),
    })
}
