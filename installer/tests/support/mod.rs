//! Test support utilities for installer behavioural tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use tempfile::TempDir;
use tenets_installer::assets::RULE_DOCUMENTS;

/// Returns the temp directory root as a UTF-8 path.
pub fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_owned()).expect("temp path should be UTF-8")
}

/// Checks that every bundled document exists under `target` byte for byte.
pub fn installed_tree_matches_bundle(target: &Utf8Path) -> bool {
    RULE_DOCUMENTS.iter().all(|document| {
        std::fs::read_to_string(target.join(document.relative_path))
            .is_ok_and(|written| written == document.contents)
    })
}

/// Counts the markdown files under `dir`, recursively.
pub fn on_disk_document_count(dir: &Utf8Path) -> usize {
    let mut count = 0;
    for entry in dir.read_dir_utf8().expect("failed to read directory") {
        let dir_entry = entry.expect("failed to read directory entry");
        let path = dir_entry.path();
        if path.is_dir() {
            count += on_disk_document_count(path);
        } else if path.extension() == Some("md") {
            count += 1;
        }
    }
    count
}

/// Takes a full snapshot of a directory tree: relative path to contents.
///
/// A missing directory snapshots as empty, so refusal scenarios can compare
/// before/after without special-casing.
pub fn snapshot_tree(dir: &Utf8Path) -> BTreeMap<Utf8PathBuf, Vec<u8>> {
    let mut snapshot = BTreeMap::new();
    if dir.exists() {
        collect_snapshot(dir, dir, &mut snapshot);
    }
    snapshot
}

fn collect_snapshot(root: &Utf8Path, dir: &Utf8Path, snapshot: &mut BTreeMap<Utf8PathBuf, Vec<u8>>) {
    for entry in dir.read_dir_utf8().expect("failed to read directory") {
        let dir_entry = entry.expect("failed to read directory entry");
        let path = dir_entry.path();
        if path.is_dir() {
            collect_snapshot(root, path, snapshot);
        } else {
            let relative = path
                .strip_prefix(root)
                .expect("entry should live under root")
                .to_owned();
            let contents = std::fs::read(path).expect("failed to read file");
            snapshot.insert(relative, contents);
        }
    }
}
