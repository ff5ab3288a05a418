//! Plain-text extraction from the tracker's rich-document node trees.
//!
//! Worklog comments arrive as nested document nodes (the Atlassian Document
//! Format shape), not plain strings. Only two node shapes carry text: leaf
//! nodes of type `text` with a literal `text` value, and container nodes
//! with a `content` list of children. Everything else (media, mentions,
//! rules) contributes nothing.

use serde::{Deserialize, Serialize};

/// A single node of a rich-document tree.
///
/// All fields are optional so that any node shape the tracker emits can be
/// decoded; extraction decides what contributes text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocNode {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Option<Vec<DocNode>>,
}

/// Flattens a document tree into plain text.
///
/// Text leaves contribute their literal value; container nodes contribute
/// the newline-joined extraction of their children; any other shape
/// contributes the empty string. Terminates on any finite tree.
pub fn extract(node: &DocNode) -> String {
    if node.kind.as_deref() == Some("text") {
        if let Some(text) = &node.text {
            return text.clone();
        }
    }
    if let Some(children) = &node.content {
        return children.iter().map(extract).collect::<Vec<_>>().join("\n");
    }
    String::new()
}
