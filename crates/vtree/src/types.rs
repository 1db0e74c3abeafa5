//! Core type definitions for the rendered tree
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Closed node-kind set: host element, composite, text
//! 3. Use SmallVec for child lists (most nodes have few children)

use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

use crate::component::{Component, ComponentRef, Instance};

/// Node identifier (index into arena)
pub type NodeId = u32;

/// Attribute name → value. Order-insensitive, keys unique.
pub type Props = HashMap<String, Value>;

/// Reserved tag for a fragment that survives at the root of a tree
pub const FRAGMENT_TAG: &str = "#fragment";

/// How far a traversal descends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Composite nodes are opaque leaves
    Shallow,
    /// Every arena child is visited
    Deep,
}

/// What a node is
#[derive(Debug, Clone)]
pub enum NodeKind {
    Host { tag: String },
    Composite { component: ComponentRef },
    Text { content: String },
}

impl NodeKind {
    /// Same kind and same tag / component identity / text
    pub fn same_kind(&self, other: &NodeKind) -> bool {
        match (self, other) {
            (NodeKind::Host { tag: a }, NodeKind::Host { tag: b }) => a == b,
            (NodeKind::Composite { component: a }, NodeKind::Composite { component: b }) => {
                Component::same(a, b)
            }
            (NodeKind::Text { content: a }, NodeKind::Text { content: b }) => a == b,
            _ => false,
        }
    }
}

/// One arena slot
///
/// Text nodes never have props or children.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub node_id: NodeId,
    pub kind: NodeKind,

    // Navigation indices
    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>,

    pub props: Props,

    /// Mounted instance backing this node (shallow root only)
    pub instance: Option<Instance>,
}

impl TreeNode {
    pub fn new(node_id: NodeId, kind: NodeKind) -> Self {
        Self {
            node_id,
            kind,
            parent_id: None,
            children_ids: SmallVec::new(),
            props: Props::new(),
            instance: None,
        }
    }

    /// Tag name for host nodes
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Host { tag } => Some(tag),
            _ => None,
        }
    }

    /// Component reference for composite nodes
    pub fn component(&self) -> Option<&ComponentRef> {
        match &self.kind {
            NodeKind::Composite { component } => Some(component),
            _ => None,
        }
    }

    /// Tag or component display name; `None` for text
    pub fn display_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Host { tag } => Some(tag),
            NodeKind::Composite { component } => Some(component.name()),
            NodeKind::Text { .. } => None,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self.kind, NodeKind::Host { .. })
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Composite { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    pub fn is_fragment(&self) -> bool {
        self.tag_name() == Some(FRAGMENT_TAG)
    }

    /// Literal text content for text nodes
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Get attribute value
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// Type of a non-text node; `None` for text
    pub fn node_type(&self) -> Option<NodeType> {
        match &self.kind {
            NodeKind::Host { tag } if tag == FRAGMENT_TAG => Some(NodeType::Fragment),
            NodeKind::Host { tag } => Some(NodeType::Tag(tag.clone())),
            NodeKind::Composite { component } => Some(NodeType::Component(component.clone())),
            NodeKind::Text { .. } => None,
        }
    }
}

/// Answer to "what type is this node"
#[derive(Debug, Clone)]
pub enum NodeType {
    Tag(String),
    Component(ComponentRef),
    Fragment,
}

impl NodeType {
    pub fn tag(name: impl Into<String>) -> Self {
        NodeType::Tag(name.into())
    }

    /// Tag name, component display name, or the fragment tag
    pub fn name(&self) -> &str {
        match self {
            NodeType::Tag(tag) => tag,
            NodeType::Component(component) => component.name(),
            NodeType::Fragment => FRAGMENT_TAG,
        }
    }
}

impl PartialEq for NodeType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NodeType::Tag(a), NodeType::Tag(b)) => a == b,
            (NodeType::Component(a), NodeType::Component(b)) => Component::same(a, b),
            (NodeType::Fragment, NodeType::Fragment) => true,
            _ => false,
        }
    }
}

impl PartialEq<&str> for NodeType {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, NodeType::Tag(tag) if tag == other)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
