//! Existence guarding for the installation target.
//!
//! An existing target is never merged into or partially overwritten.
//! Replacement is all-or-nothing and only happens under the explicit
//! `--force` opt-in.

use crate::error::{InstallerError, Result};
use camino::Utf8Path;
use log::debug;
use std::fs;

/// How the installer may proceed against the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAction {
    /// The target does not exist; install into a fresh directory.
    Install,
    /// The target exists and `--force` was given; delete it, then install.
    Replace,
}

/// Decide what to do with the target path.
///
/// # Errors
///
/// Returns [`InstallerError::TargetExists`] when the target exists and
/// `force` is false. No side effect has occurred at that point and none
/// will: the copier must not be invoked on this error.
pub fn decide_target_action(target: &Utf8Path, force: bool) -> Result<TargetAction> {
    if !target.exists() {
        return Ok(TargetAction::Install);
    }
    if !force {
        return Err(InstallerError::TargetExists {
            path: target.to_owned(),
        });
    }
    Ok(TargetAction::Replace)
}

/// Carry out the decided action's destructive half.
///
/// [`TargetAction::Replace`] deletes the existing target, whether it is a
/// directory tree or a plain file; this is irreversible and authorised
/// solely by the `--force` flag. [`TargetAction::Install`] is a no-op.
///
/// # Errors
///
/// Returns an error if the existing target cannot be removed.
pub fn prepare_target(target: &Utf8Path, action: TargetAction) -> Result<()> {
    if action == TargetAction::Replace {
        debug!("removing existing target {target}");
        if target.is_dir() {
            fs::remove_dir_all(target)?;
        } else {
            fs::remove_file(target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn sandbox_target(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().join("docs/conventions"))
            .expect("temp path should be UTF-8")
    }

    #[rstest]
    #[case::without_force(false)]
    #[case::with_force(true)]
    fn absent_target_always_installs(#[case] force: bool) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = sandbox_target(&temp);

        let action = decide_target_action(&target, force).expect("absent target must proceed");
        assert_eq!(action, TargetAction::Install);
    }

    #[test]
    fn existing_target_without_force_is_refused_untouched() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = sandbox_target(&temp);
        std::fs::create_dir_all(&target).expect("failed to create target");
        std::fs::write(target.join("custom.md"), b"user content").expect("failed to write");

        let err = decide_target_action(&target, false).expect_err("existing target must refuse");
        assert!(matches!(err, InstallerError::TargetExists { .. }));
        assert!(err.to_string().contains("--force"));

        let preserved =
            std::fs::read(target.join("custom.md")).expect("user file should survive refusal");
        assert_eq!(preserved, b"user content");
    }

    #[test]
    fn existing_target_with_force_is_replaced() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = sandbox_target(&temp);
        std::fs::create_dir_all(target.join("nested")).expect("failed to create target");
        std::fs::write(target.join("nested/old.md"), b"old").expect("failed to write");

        let action = decide_target_action(&target, true).expect("forced replace must proceed");
        assert_eq!(action, TargetAction::Replace);

        prepare_target(&target, action).expect("removal should succeed");
        assert!(!target.exists());
    }

    #[test]
    fn existing_file_at_target_without_force_is_refused() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = sandbox_target(&temp);
        std::fs::create_dir_all(target.parent().expect("target has a parent"))
            .expect("failed to create parent");
        std::fs::write(&target, b"a file, not a directory").expect("failed to write");

        let err = decide_target_action(&target, false).expect_err("existing file must refuse");
        assert!(matches!(err, InstallerError::TargetExists { .. }));
        assert!(target.is_file(), "refusal must leave the file in place");
    }

    #[test]
    fn existing_file_at_target_with_force_is_replaced() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = sandbox_target(&temp);
        std::fs::create_dir_all(target.parent().expect("target has a parent"))
            .expect("failed to create parent");
        std::fs::write(&target, b"a file, not a directory").expect("failed to write");

        let action = decide_target_action(&target, true).expect("forced replace must proceed");
        assert_eq!(action, TargetAction::Replace);

        prepare_target(&target, action).expect("removal should succeed");
        assert!(!target.exists());
    }

    #[test]
    fn prepare_target_is_a_no_op_for_fresh_installs() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = sandbox_target(&temp);

        prepare_target(&target, TargetAction::Install).expect("no-op should succeed");
        assert!(!target.exists());
    }
}
