//! Renderer configuration

use serde::{Deserialize, Serialize};
use vtree::SerializerConfig;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Longest chain of nested composite expansions `render()` will follow
    pub max_expansion_depth: usize,
    /// Total composite renders one `render()` call may perform
    pub max_expansions: usize,
    pub serializer: SerializerConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_expansion_depth: 64,
            max_expansions: 10_000,
            serializer: SerializerConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
