//! Tenets installer CLI entrypoint.
//!
//! This binary copies the bundled convention documents into a project's
//! working tree, refusing to touch an existing installation unless the
//! `--force` flag authorises replacement.

use clap::Parser;
use std::io::Write;
use tenets_installer::assets::source_documents;
use tenets_installer::cli::{Cli, Command, InstallArgs};
use tenets_installer::error::Result;
use tenets_installer::list::run_list;
use tenets_installer::output::{DryRunInfo, write_stderr_line};
use tenets_installer::pipeline::{InstallContext, current_project_dir, run_install};
use tenets_installer::resolver::effective_target;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Some(Command::List(args)) => run_list(args, stdout),
        Some(Command::Install(args)) => run_install_command(args, stderr),
        None => run_install_command(&cli.install, stderr),
    }
}

/// Resolves the target, then runs the guard, copy, and report stages.
fn run_install_command(args: &InstallArgs, stderr: &mut dyn Write) -> Result<()> {
    let base = current_project_dir()?;
    let target = effective_target(&base, args.target.as_deref());

    // Resolve the bundle before any side effect so a packaging defect
    // aborts with the target untouched.
    let documents = source_documents()?;

    if args.dry_run {
        let info = DryRunInfo {
            target: &target,
            target_exists: target.exists(),
            force: args.force,
            documents,
        };
        write_stderr_line(stderr, info.display_text());
        return Ok(());
    }

    let context = InstallContext {
        target: &target,
        force: args.force,
        quiet: args.quiet,
    };
    run_install(&context, documents, stderr)?;

    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}
