//! Graph algorithms (traversal, connectivity, shortest paths)
//!
//! All algorithms read a shared `&CsrGraph` and never mutate it.

pub mod shortest_path;
pub mod structure;
pub mod traversal;

pub use shortest_path::{
    shortest_path_between, shortest_paths, DistanceMatrix, PathConfig, PathMethod,
    ShortestPathSolver, SparseSolver,
};
pub use structure::{connected_components, is_connected, is_connected_with, Connectivity};
pub use traversal::{
    breadth_first_search, bfs, depth_first_search, dfs, traverse, TraversalMode,
    TraversalResult, NULL_PREDECESSOR,
};
