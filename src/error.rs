//! Error taxonomy for graph algorithms
//!
//! Public functions return [`anyhow::Result`]; every failure raised by this
//! crate is a [`GraphError`] underneath, recoverable with
//! `err.downcast_ref::<GraphError>()`.
//!
//! Unreachable node pairs are not errors. Shortest-path results carry them as
//! `f64::INFINITY`.

use thiserror::Error;

/// Graph algorithm errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Caller supplied an argument the algorithm cannot work with
    /// (unknown method, non-square adjacency, empty source set, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Node index outside `[0, num_nodes)`
    #[error("Node ID {node} out of bounds (graph has {num_nodes} nodes)")]
    NodeOutOfBounds {
        /// Offending index
        node: u64,
        /// Valid range is `0..num_nodes`
        num_nodes: usize,
    },

    /// Input is well-formed but violates an algorithm precondition
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Worker pool for parallel source computations could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl GraphError {
    /// Shorthand for [`GraphError::InvalidArgument`]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn out_of_bounds(node: impl Into<u64>, num_nodes: usize) -> Self {
        Self::NodeOutOfBounds {
            node: node.into(),
            num_nodes,
        }
    }

    /// `true` for every error caused by a bad argument, including
    /// out-of-range node indices
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::NodeOutOfBounds { .. }
        )
    }
}
