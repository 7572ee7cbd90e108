//! Output formatting for the installer CLI.
//!
//! Progress and result messages go to stderr so that stdout stays free for
//! machine-readable listing output.

use crate::assets::RuleDocument;
use camino::Utf8Path;
use std::io::Write;

/// Write a single line to the given stderr sink.
///
/// Write failures are ignored: output is best-effort and must never turn a
/// successful install into a failure.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// Format the success message after installation.
#[must_use]
pub fn success_message(count: usize, target: &Utf8Path) -> String {
    let plural = if count == 1 { "document" } else { "documents" };
    format!("Installed {count} convention {plural} to {target}")
}

/// Configuration information for dry-run output.
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// Resolved installation target.
    pub target: &'a Utf8Path,
    /// Whether the target already exists on disk.
    pub target_exists: bool,
    /// Whether `--force` was given.
    pub force: bool,
    /// Documents that would be installed.
    pub documents: &'a [RuleDocument],
}

impl DryRunInfo<'_> {
    /// Format the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut lines = vec![
            "Dry run - no files will be modified".to_owned(),
            String::new(),
            format!("Target directory: {}", self.target),
        ];

        match (self.target_exists, self.force) {
            (true, false) => lines.push(
                "The target already exists; the install would be refused. \
                 Pass --force to replace it."
                    .to_owned(),
            ),
            (true, true) => lines
                .push("The existing target would be deleted and replaced.".to_owned()),
            (false, _) => lines.push("The target would be created.".to_owned()),
        }

        lines.push(String::new());
        lines.push("Documents to install:".to_owned());
        for document in self.documents {
            lines.push(format!("  - {}", document.relative_path));
        }

        lines.join("\n")
    }
}
