//! Shallow rendering and tree queries
//!
//! Render a component tree one level deep, then locate, filter and inspect
//! nodes without access to the code that built it.
//!
//! ```text
//! Element ──Renderer::shallow──→ Wrapper ──find/filter/children──→ Wrapper
//!                                   │
//!                                   ├─ Selector::compile(query, registry)
//!                                   └─ render() → Wrapper (no component barriers)
//! ```
//!
//! Composite nodes are barriers: `find` sees them, but not what they would
//! render, until `render()` expands everything.

pub mod config;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod selector;
pub mod wrapper;

pub use config::RenderConfig;
pub use error::{QueryError, Result};
pub use registry::ComponentRegistry;
pub use renderer::{shallow, Renderer};
pub use selector::{Query, Selector};
pub use wrapper::{Needle, Wrapper};

pub use vtree::{Component, ComponentRef, Element, Instance, NodeType};
