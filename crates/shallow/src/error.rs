//! Query errors
//!
//! Raised synchronously at the call that breaks a contract. "No matches" is
//! never an error: find/filter/contains just come back empty.

use thiserror::Error;
use vtree::TreeError;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{operation}() requires exactly one node, found {count}")]
    Arity {
        operation: &'static str,
        count: usize,
    },

    #[error("Child index {index} out of range: node has {len} children")]
    Index { index: usize, len: usize },

    #[error("{operation}() is ambiguous over {count} nodes, narrow the selection with filter() first")]
    Ambiguity {
        operation: &'static str,
        count: usize,
    },

    #[error("Maximum expansion depth exceeded: {depth} > {max}")]
    ExpansionLimit { depth: usize, max: usize },

    #[error("Maximum composite expansions exceeded: {max}")]
    ExpansionBudget { max: usize },

    #[error("Invalid node type: expected {expected}, got {actual}")]
    InvalidNodeType { expected: String, actual: String },

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
