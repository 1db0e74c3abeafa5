//! Descriptor ⇄ arena conversion
//!
//! Building never renders anything: composite elements become opaque
//! composite nodes that keep the children they were handed. Fragments are
//! flattened into their parent; only a root fragment keeps a node of its own.

use crate::arena::Tree;
use crate::component::Instance;
use crate::element::Element;
use crate::error::Result;
use crate::types::{NodeId, NodeKind, Props, TreeNode, FRAGMENT_TAG};

impl Tree {
    /// Build a tree from a descriptor, rooted at `element`
    pub fn from_element(element: &Element) -> Self {
        let mut tree = Tree::with_capacity(count_hint(element));
        let root_id = tree.build_node(element, None);
        tree.root_id = Some(root_id);
        tracing::trace!(nodes = tree.len(), "Built tree from element");
        tree
    }

    /// Build a tree whose root is the output of a mounted composite
    pub fn from_mounted(output: &Element, instance: Instance) -> Self {
        let mut tree = Self::from_element(output);
        if let Some(root_id) = tree.root_id() {
            if let Ok(root) = tree.get_mut(root_id) {
                root.instance = Some(instance);
            }
        }
        tree
    }

    /// Build a tree with a synthetic fragment root over several elements
    pub fn from_elements(elements: &[Element]) -> Self {
        Self::from_element(&Element::Fragment(elements.to_vec()))
    }

    /// Add one element and its children
    fn build_node(&mut self, element: &Element, parent_id: Option<NodeId>) -> NodeId {
        let no_props = Props::new();
        let (kind, props, children): (NodeKind, &Props, &[Element]) = match element {
            Element::Host {
                tag,
                props,
                children,
            } => (NodeKind::Host { tag: tag.clone() }, props, children.as_slice()),
            Element::Composite {
                component,
                props,
                children,
            } => (
                NodeKind::Composite {
                    component: component.clone(),
                },
                props,
                children.as_slice(),
            ),
            Element::Text(content) => {
                let mut node = TreeNode::new(
                    0,
                    NodeKind::Text {
                        content: content.clone(),
                    },
                );
                node.parent_id = parent_id;
                return self.add_node(node);
            }
            // Only reached for a root fragment; nested ones are flattened
            Element::Fragment(children) => (
                NodeKind::Host {
                    tag: FRAGMENT_TAG.to_string(),
                },
                &no_props,
                children.as_slice(),
            ),
        };

        let mut node = TreeNode::new(0, kind);
        node.props = props.clone();
        node.parent_id = parent_id;
        let id = self.add_node(node);
        self.build_children(id, children);
        id
    }

    fn build_children(&mut self, parent_id: NodeId, children: &[Element]) {
        let mut child_ids = smallvec::SmallVec::new();
        for child in children {
            self.build_flattened(child, parent_id, &mut child_ids);
        }
        if let Ok(node) = self.get_mut(parent_id) {
            node.children_ids = child_ids;
        }
    }

    fn build_flattened(
        &mut self,
        element: &Element,
        parent_id: NodeId,
        out: &mut smallvec::SmallVec<[NodeId; 4]>,
    ) {
        match element {
            Element::Fragment(children) => {
                for child in children {
                    self.build_flattened(child, parent_id, out);
                }
            }
            other => out.push(self.build_node(other, Some(parent_id))),
        }
    }

    /// Reconstruct the descriptor for `node_id` and everything below it
    pub fn to_element(&self, node_id: NodeId) -> Result<Element> {
        let node = self.get(node_id)?;
        let children = || -> Result<Vec<Element>> {
            node.children_ids
                .iter()
                .map(|&child_id| self.to_element(child_id))
                .collect()
        };

        Ok(match &node.kind {
            NodeKind::Host { tag } if tag == FRAGMENT_TAG => Element::Fragment(children()?),
            NodeKind::Host { tag } => Element::Host {
                tag: tag.clone(),
                props: node.props.clone(),
                children: children()?,
            },
            NodeKind::Composite { component } => Element::Composite {
                component: component.clone(),
                props: node.props.clone(),
                children: children()?,
            },
            NodeKind::Text { content } => Element::Text(content.clone()),
        })
    }
}

/// Rough node count used for pre-allocation
fn count_hint(element: &Element) -> usize {
    match element {
        Element::Host { children, .. }
        | Element::Composite { children, .. }
        | Element::Fragment(children) => 1 + children.len() * 2,
        Element::Text(_) => 1,
    }
}
