//! Element descriptors
//!
//! The caller-facing literal form of a tree: what a markup expression
//! evaluates to before anything is rendered. Descriptors are plain owned
//! values; the arena in [`crate::arena`] is built from them.

use serde_json::Value;

use crate::component::{Component, ComponentRef};
use crate::types::Props;

#[derive(Debug, Clone)]
pub enum Element {
    /// Primitive element identified by tag name
    Host {
        tag: String,
        props: Props,
        children: Vec<Element>,
    },
    /// Invocation of a component definition
    Composite {
        component: ComponentRef,
        props: Props,
        children: Vec<Element>,
    },
    /// Literal text
    Text(String),
    /// Transparent grouping; flattened into the parent when built
    Fragment(Vec<Element>),
}

impl Element {
    pub fn host(tag: impl Into<String>) -> Self {
        Element::Host {
            tag: tag.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn composite(component: &ComponentRef) -> Self {
        Element::Composite {
            component: component.clone(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(content.into())
    }

    pub fn fragment(children: impl IntoIterator<Item = Element>) -> Self {
        Element::Fragment(children.into_iter().collect())
    }

    /// Set a prop. No-op on text and fragments.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Element::Host { ref mut props, .. } | Element::Composite { ref mut props, .. } =
            self
        {
            props.insert(name.into(), value.into());
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match self {
            Element::Host {
                ref mut children, ..
            }
            | Element::Composite {
                ref mut children, ..
            }
            | Element::Fragment(ref mut children) => children.push(child),
            Element::Text(_) => {}
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match self {
            Element::Host {
                ref mut children, ..
            }
            | Element::Composite {
                ref mut children, ..
            }
            | Element::Fragment(ref mut children) => children.extend(new_children),
            Element::Text(_) => {}
        }
        self
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Element::Composite { .. })
    }
}

/// Structural equality; components compare by identity
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Element::Host {
                    tag: ta,
                    props: pa,
                    children: ca,
                },
                Element::Host {
                    tag: tb,
                    props: pb,
                    children: cb,
                },
            ) => ta == tb && pa == pb && ca == cb,
            (
                Element::Composite {
                    component: ka,
                    props: pa,
                    children: ca,
                },
                Element::Composite {
                    component: kb,
                    props: pb,
                    children: cb,
                },
            ) => Component::same(ka, kb) && pa == pb && ca == cb,
            (Element::Text(a), Element::Text(b)) => a == b,
            (Element::Fragment(a), Element::Fragment(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Element {
    fn from(content: &str) -> Self {
        Element::text(content)
    }
}

impl From<String> for Element {
    fn from(content: String) -> Self {
        Element::Text(content)
    }
}
