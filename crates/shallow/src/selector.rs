//! Selector Engine
//!
//! A query is compiled once against the component registry, then applied
//! to many candidate nodes. Compilation never looks at a candidate.
//!
//! ```text
//! &str ──registry──→ Tag | Component
//! Element          → Literal   (structural equality only)
//! Fn(&Wrapper)     → Predicate (sees a one-node wrapper)
//! ```

use std::borrow::Cow;
use std::fmt;

use vtree::{structural_eq, Element, NodeId, Tree};

use crate::registry::ComponentRegistry;
use crate::wrapper::Wrapper;

/// Predicate over a one-node wrapper
pub type PredicateFn<'a> = Box<dyn Fn(&Wrapper) -> bool + 'a>;

/// An uncompiled query
pub enum Query<'a> {
    Name(Cow<'a, str>),
    Node(Cow<'a, Element>),
    Predicate(PredicateFn<'a>),
}

impl<'a> Query<'a> {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Wrapper) -> bool + 'a,
    {
        Query::Predicate(Box::new(f))
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(name: &'a str) -> Self {
        Query::Name(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(name: &'a String) -> Self {
        Query::Name(Cow::Borrowed(name))
    }
}

impl From<String> for Query<'_> {
    fn from(name: String) -> Self {
        Query::Name(Cow::Owned(name))
    }
}

impl<'a> From<&'a Element> for Query<'a> {
    fn from(node: &'a Element) -> Self {
        Query::Node(Cow::Borrowed(node))
    }
}

impl From<Element> for Query<'_> {
    fn from(node: Element) -> Self {
        Query::Node(Cow::Owned(node))
    }
}

/// A compiled matching rule
pub enum Selector<'a> {
    Tag(String),
    Component(String),
    Literal { tree: Tree, root: NodeId },
    Predicate(PredicateFn<'a>),
}

impl<'a> Selector<'a> {
    pub fn compile(query: Query<'a>, registry: &ComponentRegistry) -> Self {
        match query {
            Query::Name(name) => {
                let name = name.trim();
                if registry.is_component_name(name) {
                    Selector::Component(name.to_string())
                } else {
                    Selector::Tag(name.to_string())
                }
            }
            Query::Node(node) => {
                let tree = Tree::from_element(&node);
                // from_element always sets a root
                let root = tree.root_id().unwrap_or_default();
                Selector::Literal { tree, root }
            }
            Query::Predicate(f) => Selector::Predicate(f),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Selector::Literal { .. })
    }

    /// Does `node_id` (a node of `scope`'s tree) match?
    ///
    /// Tag and component selectors never match text.
    pub fn matches(&self, scope: &Wrapper, node_id: NodeId) -> bool {
        let tree = scope.tree();
        let Ok(node) = tree.get(node_id) else {
            return false;
        };

        match self {
            Selector::Tag(tag) => node.tag_name() == Some(tag.as_str()),
            Selector::Component(name) => node
                .component()
                .is_some_and(|c| c.name() == name.as_str()),
            Selector::Literal { tree: literal, root } => {
                structural_eq(tree, node_id, literal, *root)
            }
            Selector::Predicate(f) => f(&scope.wrap(vec![node_id])),
        }
    }
}

impl fmt::Debug for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Selector::Component(name) => f.debug_tuple("Component").field(name).finish(),
            Selector::Literal { tree, .. } => f
                .debug_struct("Literal")
                .field("nodes", &tree.len())
                .finish(),
            Selector::Predicate(_) => f.write_str("Predicate"),
        }
    }
}
