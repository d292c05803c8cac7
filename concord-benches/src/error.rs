//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use concord_core::{ComponentsError, GraphError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Graph assembly rejected the generated edges.
    #[error("graph assembly failed: {0}")]
    Graph(#[from] GraphError),
    /// Engine construction or execution failed.
    #[error("components engine failed: {0}")]
    Components(#[from] ComponentsError),
}
