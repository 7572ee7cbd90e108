//! Scanner for discovering installed convention documents.
//!
//! Used by the `list` command to inspect an installed target without
//! modifying it.

use std::collections::BTreeMap;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};

use crate::report::DOCUMENT_EXTENSION;

/// Topic key used for documents that live directly under the target root.
pub const ROOT_TOPIC: &str = ".";

/// A single installed convention document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledDocument {
    /// Path relative to the installation target.
    pub relative_path: Utf8PathBuf,
    /// Full path on disk.
    pub path: Utf8PathBuf,
}

/// Installed documents grouped by topic.
///
/// A topic is the first path component of a document's relative path;
/// root-level documents are grouped under [`ROOT_TOPIC`].
#[derive(Debug, Clone, Default)]
pub struct InstalledDocuments {
    /// Map from topic name to the documents under it.
    pub by_topic: BTreeMap<String, Vec<InstalledDocument>>,
}

impl InstalledDocuments {
    /// Returns true when no documents are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_topic.is_empty()
    }

    /// Total number of installed documents across all topics.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.by_topic.values().map(Vec::len).sum()
    }
}

/// Scan `target` for installed documents.
///
/// A missing target is not an error; it scans as empty so the `list`
/// command can report "nothing installed" rather than failing.
///
/// # Errors
///
/// Returns an error if an existing target tree cannot be read.
pub fn scan_installed(target: &Utf8Path) -> io::Result<InstalledDocuments> {
    let mut result = InstalledDocuments::default();

    if !target.exists() {
        return Ok(result);
    }

    let mut documents = Vec::new();
    collect_documents(target, target, &mut documents)?;

    for document in documents {
        let topic = topic_for(&document.relative_path);
        result.by_topic.entry(topic).or_default().push(document);
    }

    for documents_in_topic in result.by_topic.values_mut() {
        documents_in_topic.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    }

    Ok(result)
}

/// Recursively collect documents under `dir`, recording paths relative to
/// `root`.
fn collect_documents(
    root: &Utf8Path,
    dir: &Utf8Path,
    documents: &mut Vec<InstalledDocument>,
) -> io::Result<()> {
    for entry in dir.read_dir_utf8()? {
        let dir_entry = entry?;
        let path = dir_entry.path();
        if path.is_dir() {
            collect_documents(root, path, documents)?;
        } else if path.extension() == Some(DOCUMENT_EXTENSION) {
            let relative_path = path
                .strip_prefix(root)
                .map(Utf8Path::to_owned)
                .unwrap_or_else(|_| path.to_owned());
            documents.push(InstalledDocument {
                relative_path,
                path: path.to_owned(),
            });
        }
    }
    Ok(())
}

/// Derive the topic for a document from its relative path.
fn topic_for(relative_path: &Utf8Path) -> String {
    let mut components = relative_path.components();
    let first = components.next();
    if components.next().is_some() {
        first.map_or_else(|| ROOT_TOPIC.to_owned(), |c| c.as_str().to_owned())
    } else {
        // A single component means the document sits at the target root.
        ROOT_TOPIC.to_owned()
    }
}
