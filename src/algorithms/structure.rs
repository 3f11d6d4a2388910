//! Graph structure algorithms: connectivity checks and component counting
//!
//! Provides structural analysis algorithms:
//! - `is_connected`: Weak connectivity gate (one undirected traversal)
//! - `is_connected_with`: Weak or strong connectivity
//! - `connected_components`: Count weakly connected components
//!
//! # Example
//!
//! ```
//! use trueno_centrality::{connected_components, is_connected, CsrGraph};
//!
//! // Two components: 0 → 1, 2 → 3
//! let graph = CsrGraph::from_pairs(4, &[(0, 1), (2, 3)]).unwrap();
//!
//! assert!(!is_connected(&graph));
//! assert_eq!(connected_components(&graph), 2);
//! ```

use crate::algorithms::traversal::{breadth_first_search, traverse, TraversalMode};
use crate::storage::{CsrGraph, NodeId};

/// Notion of connectivity for directed graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Connected when edge directions are ignored
    #[default]
    Weak,
    /// Every node reaches every other node along edge directions
    Strong,
}

/// Check whether the graph is weakly connected
///
/// Runs a single undirected traversal from node 0 and checks that it reaches
/// every node. The empty graph and non-square matrices are not connected.
#[must_use]
pub fn is_connected(graph: &CsrGraph) -> bool {
    is_connected_with(graph, Connectivity::Weak)
}

/// Check connectivity under the requested notion
///
/// Undirected graphs are strongly connected exactly when they are weakly
/// connected. For directed graphs, strong connectivity runs a forward
/// traversal from node 0 on the graph and on its transpose.
///
/// # Example
///
/// ```
/// use trueno_centrality::{is_connected_with, Connectivity, CsrGraph};
///
/// // 0 → 1 → 2: weakly but not strongly connected
/// let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
/// assert!(is_connected_with(&graph, Connectivity::Weak));
/// assert!(!is_connected_with(&graph, Connectivity::Strong));
/// ```
#[must_use]
pub fn is_connected_with(graph: &CsrGraph, connectivity: Connectivity) -> bool {
    let n = graph.num_nodes();
    if n == 0 || !graph.is_square() {
        return false;
    }

    match connectivity {
        Connectivity::Weak => reaches_all(graph, false),
        Connectivity::Strong if !graph.is_directed() => reaches_all(graph, false),
        Connectivity::Strong => reaches_all(graph, true) && reaches_all(&graph.transpose(), true),
    }
}

/// Count the number of weakly connected components in the graph
///
/// Treats the graph as undirected for connectivity purposes.
/// Returns 0 for the empty graph and for non-square matrices.
///
/// # Example
///
/// ```
/// use trueno_centrality::{connected_components, CsrGraph};
///
/// let graph = CsrGraph::from_pairs(6, &[(0, 1), (2, 3), (4, 5)]).unwrap();
/// assert_eq!(connected_components(&graph), 3);
/// ```
#[must_use]
pub fn connected_components(graph: &CsrGraph) -> usize {
    let n = graph.num_nodes();
    if n == 0 || !graph.is_square() {
        return 0;
    }

    let mut visited = vec![false; n];
    let mut count = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }

        #[allow(clippy::cast_possible_truncation)]
        let start_id = NodeId(start as u32);
        if let Ok(component) = traverse(graph, start_id, TraversalMode::BreadthFirst, false, false)
        {
            for node in component.node_array {
                visited[node.index()] = true;
            }
        }
        count += 1;
    }

    count
}

/// Whether a traversal from node 0 reaches every node
fn reaches_all(graph: &CsrGraph, directed: bool) -> bool {
    breadth_first_search(graph, NodeId(0), directed, false)
        .is_ok_and(|r| r.len() == graph.num_nodes())
}
