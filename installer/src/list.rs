//! List command implementation.
//!
//! Scans an installed target and prints the documents it contains. Output
//! goes to stdout; nothing on this path mutates the filesystem.

use std::io::Write;

use camino::Utf8Path;
use log::trace;

use crate::cli::ListArgs;
use crate::error::{InstallerError, Result};
use crate::list_output::{format_human, format_json};
use crate::pipeline::current_project_dir;
use crate::resolver::effective_target;
use crate::scanner::scan_installed;

/// List installed convention documents.
///
/// The target is resolved the same way as for installation: an absolute
/// `--target` is used verbatim, a relative one is joined onto the current
/// project directory, and the conventional default applies when no path is
/// given.
///
/// # Errors
///
/// Returns an error if:
/// - the project directory cannot be determined,
/// - the target directory cannot be scanned, or
/// - writing to stdout fails.
pub fn run_list(args: &ListArgs, stdout: &mut dyn Write) -> Result<()> {
    let base = current_project_dir()?;
    run_list_in(args, &base, stdout)
}

/// Internal implementation with an explicit base directory for testability.
pub(crate) fn run_list_in(
    args: &ListArgs,
    base: &Utf8Path,
    stdout: &mut dyn Write,
) -> Result<()> {
    let target = effective_target(base, args.target.as_deref());
    trace!("listing documents under {target}");

    let installed =
        scan_installed(&target).map_err(|e| InstallerError::ScanFailed { source: e })?;

    let output = if args.json {
        format_json(&installed, &target)
    } else {
        format_human(&installed, &target)
    };

    writeln!(stdout, "{output}").map_err(|e| InstallerError::WriteFailed { source: e })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_owned()).expect("temp path should be UTF-8")
    }

    #[test]
    fn lists_nothing_for_a_fresh_project() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let base = utf8_root(&temp);
        let args = ListArgs::default();
        let mut stdout = Vec::new();

        run_list_in(&args, &base, &mut stdout).expect("list should succeed");

        let output = String::from_utf8(stdout).expect("stdout was not UTF-8");
        assert!(output.contains("No convention documents installed"));
    }

    #[test]
    fn lists_installed_documents_from_an_absolute_target() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let base = utf8_root(&temp);
        let target = base.join("custom");
        std::fs::create_dir_all(target.join("style")).expect("mkdir");
        std::fs::write(target.join("style/naming.md"), b"#").expect("write");

        let args = ListArgs {
            json: false,
            target: Some(target.clone()),
        };
        let mut stdout = Vec::new();

        run_list_in(&args, &base, &mut stdout).expect("list should succeed");

        let output = String::from_utf8(stdout).expect("stdout was not UTF-8");
        assert!(output.contains("style/naming.md"));
        assert!(output.contains(target.as_str()));
    }
}
