//! trueno-centrality: traversal, shortest paths and closeness centrality over
//! sparse adjacency matrices
//!
//! # Overview
//!
//! Graphs are immutable CSR adjacency matrices with a caller-supplied
//! `directed` flag. On top of them the crate provides deterministic BFS/DFS
//! orderings, multi-source shortest-path distance matrices, connectivity
//! checks, and closeness centrality computed exactly or from an
//! Eppstein–Wang sample of source nodes.
//!
//! # Quick Start
//!
//! ```
//! use trueno_centrality::{closeness, ClosenessConfig, CsrGraph, GraphError};
//!
//! // Undirected path 0 - 1 - 2 - 3
//! let graph = CsrGraph::from_pairs(4, &[(0, 1), (1, 2), (2, 3)])
//!     .unwrap()
//!     .undirected();
//!
//! let exact = closeness(&graph, &ClosenessConfig::exact()).unwrap();
//! assert_eq!(exact.scores, vec![0.5, 0.75, 0.75, 0.5]);
//!
//! // Disconnected input is rejected, never scored
//! let split = CsrGraph::from_pairs(4, &[(0, 1), (2, 3)]).unwrap();
//! let err = closeness(&split, &ClosenessConfig::exact()).unwrap_err();
//! assert!(matches!(
//!     err.downcast_ref::<GraphError>(),
//!     Some(GraphError::PreconditionFailed(_))
//! ));
//! ```
//!
//! # Architecture
//!
//! - **Storage**: CSR (Compressed Sparse Row) plus reverse CSR for incoming edges
//! - **Algorithms**: traversal, connectivity, shortest paths (hop counting / Dijkstra)
//! - **Ranking**: closeness centrality, sequential or on a rayon pool
//! - **Errors**: `anyhow::Result` carrying a typed [`GraphError`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod error;
pub mod ranking;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bfs, breadth_first_search, connected_components, depth_first_search, dfs, is_connected,
    is_connected_with, shortest_path_between, shortest_paths, traverse, Connectivity,
    DistanceMatrix, PathConfig, PathMethod, ShortestPathSolver, SparseSolver, TraversalMode,
    TraversalResult, NULL_PREDECESSOR,
};
pub use error::GraphError;
pub use ranking::{
    closeness, closeness_with_rng, sample_size, Closeness, ClosenessConfig, ClosenessResult,
    Method,
};
pub use storage::{CsrGraph, NodeId};

// Error type
pub use anyhow::{Error, Result};
