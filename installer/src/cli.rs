//! CLI argument definitions for the Tenets installer.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and focused
//! on orchestration.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Install the bundled Tenets convention documents.
#[derive(Parser, Debug)]
#[command(name = "tenets-installer")]
#[command(version, about)]
#[command(long_about = concat!(
    "Install the bundled Tenets convention documents.\n\n",
    "Tenets ships a read-only set of project convention documents (commit ",
    "style, naming, testing, error handling, and documentation rules). This ",
    "installer copies the bundle into a project's working tree.\n\n",
    "An existing target directory is never merged into or partially ",
    "overwritten: without --force the install is refused and the directory ",
    "is left untouched; with --force it is deleted and replaced wholesale.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Install into the default location (docs/conventions):\n",
    "    $ tenets-installer\n\n",
    "  Install into a custom directory:\n",
    "    $ tenets-installer --target .conventions\n\n",
    "  Replace a previous installation:\n",
    "    $ tenets-installer --force\n\n",
    "  Preview without writing anything:\n",
    "    $ tenets-installer --dry-run\n\n",
    "  List installed documents:\n",
    "    $ tenets-installer list\n",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Install arguments (used when no subcommand is given).
    #[command(flatten)]
    pub install: InstallArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Install the convention documents (default when no subcommand given).
    Install(InstallArgs),

    /// List installed convention documents.
    List(ListArgs),
}

/// Arguments for the install command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InstallArgs {
    /// Installation directory [default: docs/conventions].
    ///
    /// Relative paths are joined onto the current directory; absolute paths
    /// are used verbatim.
    #[arg(short, long, value_name = "DIR")]
    pub target: Option<Utf8PathBuf>,

    /// Delete and replace an existing target directory.
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be installed and exit without side effects.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the list command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ListArgs {
    /// Output in JSON format for scripting.
    #[arg(long)]
    pub json: bool,

    /// Directory to scan [default: docs/conventions].
    #[arg(short, long, value_name = "DIR")]
    pub target: Option<Utf8PathBuf>,
}

impl Cli {
    /// Returns the effective install arguments.
    ///
    /// If an `Install` subcommand was provided, returns those arguments.
    /// Otherwise returns the flattened install arguments so that a bare
    /// `tenets-installer` invocation installs.
    #[must_use]
    pub const fn install_args(&self) -> &InstallArgs {
        match &self.command {
            Some(Command::Install(args)) => args,
            Some(Command::List(_)) | None => &self.install,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
