//! Output formatting for the document listing.
//!
//! Human-readable by default, JSON for scripting.

use camino::Utf8Path;
use serde::Serialize;

use crate::scanner::InstalledDocuments;

/// Format installed documents for human-readable output.
#[must_use]
pub fn format_human(documents: &InstalledDocuments, target: &Utf8Path) -> String {
    if documents.is_empty() {
        return format!(
            "No convention documents installed at {target}.\n\n\
             Run `tenets-installer` to install the bundle."
        );
    }

    let mut output = format!(
        "Installed convention documents at {target} ({} total):\n",
        documents.document_count()
    );

    for (topic, topic_documents) in &documents.by_topic {
        output.push('\n');
        output.push_str(&format!("{topic}:\n"));
        for document in topic_documents {
            output.push_str(&format!("  - {}\n", document.relative_path));
        }
    }

    output
}

/// Format installed documents as pretty-printed JSON.
#[must_use]
pub fn format_json(documents: &InstalledDocuments, target: &Utf8Path) -> String {
    let json_data = InstalledDocumentsJson::from_installed(documents, target);
    serde_json::to_string_pretty(&json_data).unwrap_or_else(|_| "{}".to_owned())
}

/// JSON-serializable representation of the document listing.
#[derive(Debug, Serialize)]
struct InstalledDocumentsJson {
    /// Installation target the listing was taken from.
    target: String,
    /// Topics with their documents, in stable order.
    topics: Vec<TopicEntry>,
}

/// One topic and the documents under it.
#[derive(Debug, Serialize)]
struct TopicEntry {
    /// Topic name; `.` for root-level documents.
    name: String,
    /// Document paths relative to the target.
    documents: Vec<String>,
}

impl InstalledDocumentsJson {
    fn from_installed(documents: &InstalledDocuments, target: &Utf8Path) -> Self {
        let topics = documents
            .by_topic
            .iter()
            .map(|(topic, topic_documents)| TopicEntry {
                name: topic.clone(),
                documents: topic_documents
                    .iter()
                    .map(|d| d.relative_path.as_str().to_owned())
                    .collect(),
            })
            .collect();

        Self {
            target: target.as_str().to_owned(),
            topics,
        }
    }
}
