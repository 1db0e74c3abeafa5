//! Shallow and deep rendering
//!
//! - `shallow`: one level of composite expansion. A composite root is
//!   mounted and replaced by its output; composites inside that output stay
//!   opaque.
//! - `expand`: repeated composite expansion until only host elements and
//!   text remain, bounded by [`RenderConfig`] so a self-rendering component
//!   fails instead of looping.

use std::sync::Arc;

use vtree::{Element, Instance, Tree};

use crate::config::RenderConfig;
use crate::error::{QueryError, Result};
use crate::registry::ComponentRegistry;
use crate::wrapper::Wrapper;

/// Shared rendering context: configuration + component registry
///
/// Cheap to clone; every wrapper carries one.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: Arc<RenderConfig>,
    registry: Arc<ComponentRegistry>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::default(),
        }
    }

    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Render `element` one level deep and wrap the result
    pub fn shallow(&self, element: &Element) -> Wrapper {
        let tree = match element {
            Element::Composite {
                component,
                props,
                children,
            } => {
                tracing::debug!(component = component.name(), "Mounting root composite");
                let instance = Instance::new(component.clone(), props.clone(), children.clone());
                let output = component.render(props, children);
                Tree::from_mounted(&output, instance)
            }
            other => Tree::from_element(other),
        };

        Wrapper::root(Arc::new(tree), self.clone())
    }

    /// Expand every composite in `element`, recursively
    pub fn expand(&self, element: &Element) -> Result<Element> {
        let mut expansions = 0;
        self.expand_at(element, 0, &mut expansions)
    }

    /// Expand several elements side by side under one expansion budget
    pub fn expand_many(&self, elements: &[Element]) -> Result<Vec<Element>> {
        let mut expansions = 0;
        self.expand_all(elements, 0, &mut expansions)
    }

    fn expand_at(
        &self,
        element: &Element,
        depth: usize,
        expansions: &mut usize,
    ) -> Result<Element> {
        match element {
            Element::Composite {
                component,
                props,
                children,
            } => {
                let max = self.config.max_expansion_depth;
                if depth >= max {
                    tracing::warn!(
                        component = component.name(),
                        depth = depth + 1,
                        max,
                        "Composite expansion too deep"
                    );
                    return Err(QueryError::ExpansionLimit {
                        depth: depth + 1,
                        max,
                    });
                }

                *expansions += 1;
                if *expansions > self.config.max_expansions {
                    tracing::warn!(
                        component = component.name(),
                        max = self.config.max_expansions,
                        "Composite expansion budget exhausted"
                    );
                    return Err(QueryError::ExpansionBudget {
                        max: self.config.max_expansions,
                    });
                }

                tracing::trace!(component = component.name(), depth, "Expanding composite");
                let output = component.render(props, children);
                self.expand_at(&output, depth + 1, expansions)
            }
            Element::Host {
                tag,
                props,
                children,
            } => Ok(Element::Host {
                tag: tag.clone(),
                props: props.clone(),
                children: self.expand_all(children, depth, expansions)?,
            }),
            Element::Fragment(children) => {
                Ok(Element::Fragment(self.expand_all(children, depth, expansions)?))
            }
            Element::Text(content) => Ok(Element::Text(content.clone())),
        }
    }

    fn expand_all(
        &self,
        children: &[Element],
        depth: usize,
        expansions: &mut usize,
    ) -> Result<Vec<Element>> {
        children
            .iter()
            .map(|child| self.expand_at(child, depth, expansions))
            .collect()
    }
}

/// Shallow-render with a default renderer
pub fn shallow(element: &Element) -> Wrapper {
    Renderer::new().shallow(element)
}
