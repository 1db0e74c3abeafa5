//! Composite component definitions and mounted instances
//!
//! A component is a named render function. The tree never looks inside it,
//! it only stores the reference and hands it to whoever expands the node.

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::element::Element;
use crate::types::Props;

/// Render callback: props + passed-in children → output element
pub type RenderFn = dyn Fn(&Props, &[Element]) -> Element + Send + Sync;

/// Shared handle to a component definition
///
/// Identity is the `Arc` allocation, not the name.
pub type ComponentRef = Arc<Component>;

/// A composite definition: display name plus render function
pub struct Component {
    name: String,
    render: Box<RenderFn>,
}

impl Component {
    /// Define a component
    pub fn new<F>(name: impl Into<String>, render: F) -> ComponentRef
    where
        F: Fn(&Props, &[Element]) -> Element + Send + Sync + 'static,
    {
        Arc::new(Self {
            name: name.into(),
            render: Box::new(render),
        })
    }

    /// Display name used by component selectors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce this component's output one level down
    pub fn render(&self, props: &Props, children: &[Element]) -> Element {
        (self.render)(props, children)
    }

    /// Pointer identity between two component references
    pub fn same(a: &ComponentRef, b: &ComponentRef) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Opaque handle for a mounted composite
///
/// Created by the shallow renderer for the root composite it expands.
#[derive(Debug, Clone)]
pub struct Instance {
    id: Uuid,
    component: ComponentRef,
    props: Props,
    children: Vec<Element>,
}

impl Instance {
    pub fn new(component: ComponentRef, props: Props, children: Vec<Element>) -> Self {
        Self {
            id: Uuid::new_v4(),
            component,
            props,
            children,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// `instanceof` check against a component definition
    pub fn is(&self, component: &ComponentRef) -> bool {
        Component::same(&self.component, component)
    }
}

/// Two handles are equal when they refer to the same mount
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Instance {}
