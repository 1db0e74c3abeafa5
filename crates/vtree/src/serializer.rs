//! Tree Serializer - human-readable views of a tree
//!
//! Two formats:
//! - `debug`: indented, one node per line, composites shown as `<Name />`
//!   (with the children they were handed, if any)
//! - `html`: compact markup, meant for trees with no composite nodes left.
//!   Text is written in full; `max_text_length` only applies to `debug`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::arena::Tree;
use crate::error::Result;
use crate::types::{NodeId, NodeKind, Props, TreeNode};
use crate::utils::cap_text_length;

/// Serializer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Spaces per nesting level in `debug` output
    pub indent: usize,
    pub max_text_length: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            max_text_length: 200,
        }
    }
}

pub struct TreeSerializer {
    config: SerializerConfig,
}

impl TreeSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Indented debug view of `node_id` and its subtree
    pub fn debug(&self, tree: &Tree, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        self.debug_node(tree, node_id, 0, &mut output)?;
        // Drop the final newline
        output.pop();
        Ok(output)
    }

    fn debug_node(
        &self,
        tree: &Tree,
        node_id: NodeId,
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        let node = tree.get(node_id)?;
        let indent = " ".repeat(depth * self.config.indent);

        let name = match &node.kind {
            NodeKind::Text { content } => {
                output.push_str(&indent);
                output.push_str(&cap_text_length(content, self.config.max_text_length));
                output.push('\n');
                return Ok(());
            }
            NodeKind::Host { tag } => tag.as_str(),
            NodeKind::Composite { component } => component.name(),
        };

        output.push_str(&indent);
        output.push('<');
        output.push_str(name);
        push_debug_props(&node.props, output);

        if node.children_ids.is_empty() {
            output.push_str(" />\n");
            return Ok(());
        }

        output.push_str(">\n");
        for &child_id in &node.children_ids {
            self.debug_node(tree, child_id, depth + 1, output)?;
        }
        output.push_str(&indent);
        output.push_str("</");
        output.push_str(name);
        output.push_str(">\n");

        Ok(())
    }

    /// Compact markup for `node_id` and its subtree
    pub fn html(&self, tree: &Tree, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        self.html_node(tree, node_id, &mut output)?;
        Ok(output)
    }

    fn html_node(&self, tree: &Tree, node_id: NodeId, output: &mut String) -> Result<()> {
        let node = tree.get(node_id)?;

        match &node.kind {
            NodeKind::Text { content } => {
                output.push_str(&escape(content));
            }
            NodeKind::Host { .. } if node.is_fragment() => {
                self.html_children(tree, node, output)?;
            }
            NodeKind::Host { tag } => {
                output.push('<');
                output.push_str(tag);
                push_html_props(&node.props, output);
                output.push('>');
                self.html_children(tree, node, output)?;
                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeKind::Composite { component } => {
                // Left unexpanded by whoever built the tree
                output.push('<');
                output.push_str(component.name());
                output.push_str(" />");
            }
        }

        Ok(())
    }

    fn html_children(&self, tree: &Tree, node: &TreeNode, output: &mut String) -> Result<()> {
        for &child_id in &node.children_ids {
            self.html_node(tree, child_id, output)?;
        }
        Ok(())
    }
}

impl Default for TreeSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Props sorted by name so output is deterministic
fn sorted(props: &Props) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = props.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

fn push_debug_props(props: &Props, output: &mut String) {
    for (name, value) in sorted(props) {
        match value {
            Value::String(s) => {
                output.push_str(&format!(" {}=\"{}\"", name, s.replace('"', "&quot;")))
            }
            other => output.push_str(&format!(" {}={{{}}}", name, other)),
        }
    }
}

fn push_html_props(props: &Props, output: &mut String) {
    for (name, value) in sorted(props) {
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => {
                output.push(' ');
                output.push_str(name);
            }
            Value::String(s) => output.push_str(&format!(" {}=\"{}\"", name, escape(s))),
            other => output.push_str(&format!(" {}=\"{}\"", name, escape(&other.to_string()))),
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
