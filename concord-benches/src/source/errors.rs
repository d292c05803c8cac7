//! Error types for synthetic graph generation.

/// Errors that may occur while generating benchmark graphs.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested chain length was zero.
    #[error("chain length must be greater than zero")]
    ZeroChainLength,
    /// The generated graph could not be assembled.
    #[error("generated edges were rejected: {0}")]
    Graph(#[from] concord_core::GraphError),
}
