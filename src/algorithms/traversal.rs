//! Graph traversal algorithms (BFS, DFS)
//!
//! Based on Ligra (Shun & Blelloch, `PPoPP` 2013) frontier-based traversal patterns.
//!
//! Orderings are deterministic: neighbors are always expanded in ascending
//! node index, which the canonical CSR rows guarantee for free.

use crate::storage::{CsrGraph, NodeId};
use anyhow::Result;
use std::collections::VecDeque;
use tracing::trace;

/// Predecessor entry for the root and for nodes the traversal never reached
pub const NULL_PREDECESSOR: i64 = -9999;

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    /// Level by level, non-decreasing hop distance
    BreadthFirst,
    /// Pre-order, lowest-indexed unvisited neighbor first
    DepthFirst,
}

/// Outcome of a single traversal
///
/// Complete and finite: re-run the traversal to get another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    /// Visited nodes in visiting order, starting node first
    pub node_array: Vec<NodeId>,
    /// `predecessors[i]` is the parent of node `i` in the traversal tree, or
    /// [`NULL_PREDECESSOR`] for the root and unreached nodes
    pub predecessors: Option<Vec<i64>>,
}

impl TraversalResult {
    /// Number of reached nodes (including the start)
    #[must_use]
    pub fn len(&self) -> usize {
        self.node_array.len()
    }

    /// Never true for a successful traversal; the start is always reached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_array.is_empty()
    }

    /// Parent of `node` in the traversal tree
    ///
    /// `None` for the root, for unreached nodes, and when predecessors were
    /// not requested.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let pred = *self.predecessors.as_ref()?.get(node.index())?;
        u32::try_from(pred).ok().map(NodeId)
    }

    /// Tree path from the start node to `target`, both inclusive
    ///
    /// Needs predecessors. Returns `None` when `target` was not reached.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.predecessors.as_ref()?;
        let start = *self.node_array.first()?;

        let mut path = vec![target];
        let mut current = target;
        while current != start {
            current = self.parent(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Traverse the graph from `start`
///
/// # Arguments
///
/// * `graph` - Square CSR adjacency
/// * `start` - First node visited
/// * `mode` - Breadth-first or depth-first
/// * `directed` - `false` follows every edge in both directions, even when
///   the stored matrix is asymmetric
/// * `return_predecessors` - Also build the predecessor vector
///
/// # Errors
///
/// `InvalidArgument` for a non-square graph, `NodeOutOfBounds` when `start`
/// is not a node.
///
/// # Example
///
/// ```
/// use trueno_centrality::{traverse, CsrGraph, NodeId, TraversalMode, NULL_PREDECESSOR};
///
/// // Path 0 - 1 - 2 - 3 stored one way only
/// let graph = CsrGraph::from_pairs(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
///
/// let result = traverse(&graph, NodeId(0), TraversalMode::BreadthFirst, false, true).unwrap();
/// assert_eq!(result.node_array, vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
/// assert_eq!(result.predecessors, Some(vec![NULL_PREDECESSOR, 0, 1, 2]));
/// ```
pub fn traverse(
    graph: &CsrGraph,
    start: NodeId,
    mode: TraversalMode,
    directed: bool,
    return_predecessors: bool,
) -> Result<TraversalResult> {
    graph.ensure_square("traversal")?;
    graph.ensure_node(start)?;

    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut predecessors = vec![NULL_PREDECESSOR; n];

    let order = match mode {
        TraversalMode::BreadthFirst => {
            bfs_order(graph, start, directed, &mut visited, &mut predecessors)
        }
        TraversalMode::DepthFirst => {
            dfs_order(graph, start, directed, &mut visited, &mut predecessors)
        }
    };

    trace!(
        ?mode,
        start = start.0,
        directed,
        reached = order.len(),
        "traversal finished"
    );

    Ok(TraversalResult {
        node_array: order,
        predecessors: return_predecessors.then_some(predecessors),
    })
}

/// Breadth-first ordering starting with `start`
///
/// # Errors
///
/// See [`traverse`].
pub fn breadth_first_search(
    graph: &CsrGraph,
    start: NodeId,
    directed: bool,
    return_predecessors: bool,
) -> Result<TraversalResult> {
    traverse(
        graph,
        start,
        TraversalMode::BreadthFirst,
        directed,
        return_predecessors,
    )
}

/// Depth-first ordering starting with `start`
///
/// # Errors
///
/// See [`traverse`].
pub fn depth_first_search(
    graph: &CsrGraph,
    start: NodeId,
    directed: bool,
    return_predecessors: bool,
) -> Result<TraversalResult> {
    traverse(
        graph,
        start,
        TraversalMode::DepthFirst,
        directed,
        return_predecessors,
    )
}

/// Breadth-First Search from source node, honoring the graph's own
/// directedness
///
/// # Returns
///
/// All node IDs reachable from source, in BFS order
///
/// # Errors
///
/// See [`traverse`].
///
/// # Example
///
/// ```
/// use trueno_centrality::{bfs, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
///
/// let reachable = bfs(&graph, NodeId(0)).unwrap();
/// assert_eq!(reachable, vec![NodeId(0), NodeId(1), NodeId(2)]);
/// ```
pub fn bfs(graph: &CsrGraph, source: NodeId) -> Result<Vec<NodeId>> {
    breadth_first_search(graph, source, graph.is_directed(), false).map(|r| r.node_array)
}

/// Depth-First Search from source node, honoring the graph's own directedness
///
/// # Errors
///
/// See [`traverse`].
pub fn dfs(graph: &CsrGraph, source: NodeId) -> Result<Vec<NodeId>> {
    depth_first_search(graph, source, graph.is_directed(), false).map(|r| r.node_array)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // Graphs >4B nodes not supported
fn bfs_order(
    graph: &CsrGraph,
    start: NodeId,
    directed: bool,
    visited: &mut [bool],
    predecessors: &mut [i64],
) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start.index());

    while let Some(current) = queue.pop_front() {
        order.push(NodeId(current as u32));

        for neighbor in graph.neighbors(current, directed) {
            let idx = neighbor as usize;
            if !visited[idx] {
                visited[idx] = true;
                predecessors[idx] = current as i64;
                queue.push_back(idx);
            }
        }
    }

    order
}

/// Iterative pre-order DFS; explicit stack so long paths cannot overflow
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn dfs_order(
    graph: &CsrGraph,
    start: NodeId,
    directed: bool,
    visited: &mut [bool],
    predecessors: &mut [i64],
) -> Vec<NodeId> {
    let mut order = vec![start];
    visited[start.index()] = true;

    // (node, its not-yet-tried neighbors)
    let mut stack = vec![(start.index(), graph.neighbors(start.index(), directed))];

    while let Some((node, neighbors)) = stack.last_mut() {
        let parent = *node;
        match neighbors.find(|&v| !visited[v as usize]) {
            Some(child) => {
                let child = child as usize;
                visited[child] = true;
                predecessors[child] = parent as i64;
                order.push(NodeId(child as u32));
                stack.push((child, graph.neighbors(child, directed)));
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}
