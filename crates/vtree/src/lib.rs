//! Rendered component tree
//!
//! Immutable, arena-backed tree of host elements, composite component
//! nodes and text, plus the traversal and equality primitives that queries
//! are built on.
//!
//! ## Core Design
//!
//! ```text
//! Element (descriptor) → Tree (arena, NodeId = u32) → Subtree iterator
//!                              ↓
//!                  structural_eq / TreeSerializer
//! ```
//!
//! Composite nodes are traversal barriers under [`Traversal::Shallow`]:
//! they are visited, but nothing below them is.

pub mod arena;
pub mod builder;
pub mod component;
pub mod element;
pub mod equality;
pub mod error;
pub mod serializer;
pub mod types;
pub mod utils;

pub use arena::{Subtree, Tree};
pub use component::{Component, ComponentRef, Instance, RenderFn};
pub use element::Element;
pub use equality::{contains_run, find_equal, structural_eq};
pub use error::{Result, TreeError};
pub use serializer::{SerializerConfig, TreeSerializer};
pub use types::*;
