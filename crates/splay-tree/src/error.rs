use thiserror::Error;

use crate::types::NodeId;

/// Precondition violations reported by tree operations.
///
/// A missing element is not an error: lookups and deletes return `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("tree is empty")]
    EmptyTree,
    #[error("node {0} is not in the tree")]
    StaleNode(NodeId),
}
