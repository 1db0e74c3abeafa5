//! Component registry
//!
//! Lets the selector compiler decide, from a string alone, whether it names
//! a component or a tag.

use ahash::AHashMap;
use vtree::ComponentRef;

#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: AHashMap<String, ComponentRef>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register under the component's display name, returning any
    /// component it replaces
    pub fn register(&mut self, component: ComponentRef) -> Option<ComponentRef> {
        tracing::debug!("Registered component: {}", component.name());
        self.components
            .insert(component.name().to_string(), component)
    }

    pub fn get(&self, name: &str) -> Option<&ComponentRef> {
        self.components.get(name)
    }

    /// Registered names, plus the capitalized-identifier convention
    pub fn is_component_name(&self, name: &str) -> bool {
        self.components.contains_key(name)
            || name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
