//! Arena-based tree storage
//!
//! "Bad programmers worry about the code. Good programmers worry about
//! data structures and their relationships."
//!
//! A tree is a single `Vec<TreeNode>` addressed by 4-byte indices. It is
//! built once and never mutated afterwards, so wrappers share it freely.
//!
//! ## Memory Layout
//!
//! ```text
//! Tree: Vec<TreeNode>
//!       [Node0][Node1][Node2]...
//!        ↑ pre-order: a node always precedes its descendants
//! ```
//!
//! Walks over a built tree (`subtree`, `traverse_df`, structural equality)
//! use an explicit stack. Building a tree from descriptors, turning it back
//! into descriptors and serializing it recurse once per nesting level.

use crate::error::{Result, TreeError};
use crate::types::{NodeId, NodeKind, Traversal, TreeNode};

#[derive(Debug, Clone)]
pub struct Tree {
    /// All nodes stored sequentially
    nodes: Vec<TreeNode>,

    /// Root node ID (if set)
    pub(crate) root_id: Option<NodeId>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root_id: None,
        }
    }

    /// Create tree with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_id: None,
        }
    }

    /// Add a node, returns its ID
    ///
    /// The node's `node_id` is overwritten with its slot index.
    pub fn add_node(&mut self, mut node: TreeNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        self.nodes.push(node);
        node_id
    }

    /// Get node by ID
    pub fn get(&self, node_id: NodeId) -> Result<&TreeNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(TreeError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable, build phase only)
    pub(crate) fn get_mut(&mut self, node_id: NodeId) -> Result<&mut TreeNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(TreeError::NodeNotFound(node_id))
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    pub fn root(&self) -> Result<&TreeNode> {
        let root_id = self.root_id.ok_or(TreeError::EmptyTree)?;
        self.get(root_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over all nodes in arena order
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Direct children of a node, in document order
    pub fn children_ids(&self, node_id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(node_id)?.children_ids)
    }

    /// Parent node, `None` at the root
    pub fn parent(&self, node_id: NodeId) -> Result<Option<&TreeNode>> {
        let node = self.get(node_id)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(self.get(parent_id)?)),
            None => Ok(None),
        }
    }

    /// Lazy pre-order walk of `start` and everything below it
    pub fn subtree(&self, start: NodeId, traversal: Traversal) -> Subtree<'_> {
        Subtree {
            tree: self,
            stack: vec![start],
            traversal,
        }
    }

    /// Like [`Tree::subtree`] but excluding `start` itself
    pub fn descendants(&self, start: NodeId, traversal: Traversal) -> Subtree<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.nodes.get(start as usize) {
            if descends(node, traversal) {
                stack.extend(node.children_ids.iter().rev().copied());
            }
        }
        Subtree {
            tree: self,
            stack,
            traversal,
        }
    }

    /// Traverse depth-first (iterative, no recursion)
    pub fn traverse_df<F>(&self, start: NodeId, traversal: Traversal, mut visit: F) -> Result<()>
    where
        F: FnMut(&TreeNode) -> Result<()>,
    {
        self.get(start)?;
        for node_id in self.subtree(start, traversal) {
            visit(self.get(node_id)?)?;
        }
        Ok(())
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a walk continues below `node`
fn descends(node: &TreeNode, traversal: Traversal) -> bool {
    match node.kind {
        NodeKind::Composite { .. } => traversal == Traversal::Deep,
        _ => true,
    }
}

/// Pre-order iterator returned by [`Tree::subtree`] and [`Tree::descendants`]
pub struct Subtree<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
    traversal: Traversal,
}

impl Iterator for Subtree<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let node_id = self.stack.pop()?;
            let Some(node) = self.tree.nodes.get(node_id as usize) else {
                continue;
            };

            if descends(node, self.traversal) {
                // Reverse so children come off the stack left-to-right
                self.stack.extend(node.children_ids.iter().rev().copied());
            }
            return Some(node_id);
        }
    }
}
