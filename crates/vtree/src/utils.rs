//! Utility functions for tree processing

use crate::arena::Tree;
use crate::error::Result;
use crate::types::{NodeId, NodeKind, Traversal};

/// Cap text length, respecting char boundaries
pub fn cap_text_length(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let capped: String = text.chars().take(max_len).collect();
        format!("{}...", capped)
    }
}

/// Text rendered by a shallow subtree
///
/// Composite nodes are not expanded; they contribute `<Name />`.
pub fn text_content(tree: &Tree, node_id: NodeId) -> Result<String> {
    let mut text = String::new();

    tree.traverse_df(node_id, Traversal::Shallow, |node| {
        match &node.kind {
            NodeKind::Text { content } => text.push_str(content),
            NodeKind::Composite { component } => {
                text.push('<');
                text.push_str(component.name());
                text.push_str(" />");
            }
            NodeKind::Host { .. } => {}
        }
        Ok(())
    })?;

    Ok(text)
}
