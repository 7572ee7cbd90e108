//! The embedded convention-document bundle.
//!
//! The documents are compiled into the binary with `include_str!` and exposed
//! through a single manifest. The manifest is the sole source of truth for
//! what an installation contains; nothing is fetched or generated at run
//! time.

use crate::error::{InstallerError, Result};

/// A single bundled convention document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDocument {
    /// Path of the document relative to the installation target.
    pub relative_path: &'static str,
    /// Full document contents.
    pub contents: &'static str,
}

/// Manifest of every bundled document, in installation order.
///
/// Relative paths use forward slashes and must not escape the target
/// directory.
pub const RULE_DOCUMENTS: &[RuleDocument] = &[
    RuleDocument {
        relative_path: "conventions.md",
        contents: include_str!("../assets/conventions.md"),
    },
    RuleDocument {
        relative_path: "style/commit-messages.md",
        contents: include_str!("../assets/style/commit-messages.md"),
    },
    RuleDocument {
        relative_path: "style/naming.md",
        contents: include_str!("../assets/style/naming.md"),
    },
    RuleDocument {
        relative_path: "testing/unit-tests.md",
        contents: include_str!("../assets/testing/unit-tests.md"),
    },
    RuleDocument {
        relative_path: "testing/behavioural-tests.md",
        contents: include_str!("../assets/testing/behavioural-tests.md"),
    },
    RuleDocument {
        relative_path: "errors/error-handling.md",
        contents: include_str!("../assets/errors/error-handling.md"),
    },
    RuleDocument {
        relative_path: "documentation/doc-comments.md",
        contents: include_str!("../assets/documentation/doc-comments.md"),
    },
];

/// Resolve the bundled document tree.
///
/// This is the only entry point to the bundle; callers never reach into
/// [`RULE_DOCUMENTS`] directly outside of tests.
///
/// # Errors
///
/// Returns [`InstallerError::SourceMissing`] when the manifest is empty,
/// which indicates a misbuilt package rather than a user error.
pub fn source_documents() -> Result<&'static [RuleDocument]> {
    validate_manifest(RULE_DOCUMENTS)
}

/// Reject an empty manifest; the bundle must always ship documents.
fn validate_manifest(documents: &'static [RuleDocument]) -> Result<&'static [RuleDocument]> {
    if documents.is_empty() {
        return Err(InstallerError::SourceMissing {
            reason: "the embedded document manifest is empty".to_owned(),
        });
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_non_empty() {
        let documents = source_documents().expect("bundle must resolve");
        assert!(!documents.is_empty());
    }

    #[test]
    fn empty_manifest_is_a_packaging_defect() {
        let err = validate_manifest(&[]).expect_err("empty manifest must fail");
        assert!(matches!(err, InstallerError::SourceMissing { .. }));
    }

    #[test]
    fn manifest_paths_are_relative_and_contained() {
        for document in RULE_DOCUMENTS {
            assert!(
                !document.relative_path.starts_with('/'),
                "absolute path in manifest: {}",
                document.relative_path
            );
            assert!(
                !document.relative_path.split('/').any(|part| part == ".."),
                "parent traversal in manifest: {}",
                document.relative_path
            );
        }
    }

    #[test]
    fn manifest_paths_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for document in RULE_DOCUMENTS {
            assert!(
                seen.insert(document.relative_path),
                "duplicate manifest entry: {}",
                document.relative_path
            );
        }
    }

    #[test]
    fn every_document_is_markdown_with_content() {
        for document in RULE_DOCUMENTS {
            assert!(
                document.relative_path.ends_with(".md"),
                "non-markdown manifest entry: {}",
                document.relative_path
            );
            assert!(!document.contents.is_empty());
        }
    }
}
