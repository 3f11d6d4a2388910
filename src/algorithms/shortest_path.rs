//! Shortest path algorithms: multi-source distance matrices
//!
//! Provides shortest path computation over the CSR adjacency:
//! - `shortest_paths`: One row of distances per source node
//! - `shortest_path_between`: Distance and node path between two nodes
//!
//! Unit-weight graphs are solved by breadth-first hop counting, weighted
//! graphs by Dijkstra's algorithm (non-negative weights only). Unreachable
//! targets are reported as `f64::INFINITY`.
//!
//! # Example
//!
//! ```
//! use trueno_centrality::{shortest_paths, CsrGraph, NodeId, PathConfig};
//!
//! let graph = CsrGraph::from_edge_list(&[
//!     (NodeId(0), NodeId(1), 1.0),
//!     (NodeId(1), NodeId(2), 2.0),
//!     (NodeId(0), NodeId(2), 5.0),
//! ])
//! .unwrap();
//!
//! let matrix = shortest_paths(&graph, &[NodeId(0), NodeId(2)], &PathConfig::default()).unwrap();
//! assert_eq!(matrix.row(0), Some(&[0.0, 1.0, 3.0][..])); // 0→1→2 = 3.0, not 0→2 = 5.0
//! assert_eq!(matrix.row(1), Some(&[f64::INFINITY, f64::INFINITY, 0.0][..]));
//! ```

use crate::error::GraphError;
use crate::storage::{CsrGraph, NodeId};
use anyhow::Result;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use tracing::{debug, trace};

/// Algorithm used for each single-source run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMethod {
    /// Hop counting for unit-weight graphs, Dijkstra otherwise
    #[default]
    Auto,
    /// Dijkstra's algorithm over the stored weights
    Dijkstra,
    /// Breadth-first hop counting; stored weights are ignored
    BreadthFirst,
}

/// Shortest-path options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathConfig {
    /// Follow outgoing edges only (`true`) or every edge both ways (`false`)
    pub directed: bool,
    /// Single-source algorithm
    pub method: PathMethod,
    /// Count hops even when the graph carries weights
    pub unweighted: bool,
    /// Worker hint: `None` runs sequentially, `Some(w <= 0)` uses every
    /// available thread, `Some(w > 0)` uses `w` threads
    pub workers: Option<i32>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            directed: true,
            method: PathMethod::Auto,
            unweighted: false,
            workers: None,
        }
    }
}

impl PathConfig {
    /// Set directedness
    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set the single-source algorithm
    #[must_use]
    pub const fn method(mut self, method: PathMethod) -> Self {
        self.method = method;
        self
    }

    /// Force hop counting
    #[must_use]
    pub const fn unweighted(mut self, unweighted: bool) -> Self {
        self.unweighted = unweighted;
        self
    }

    /// Set the worker hint
    #[must_use]
    pub const fn workers(mut self, workers: Option<i32>) -> Self {
        self.workers = workers;
        self
    }

    fn counts_hops(&self, graph: &CsrGraph) -> bool {
        match self.method {
            PathMethod::BreadthFirst => true,
            PathMethod::Dijkstra => self.unweighted,
            PathMethod::Auto => self.unweighted || graph.is_unweighted(),
        }
    }
}

/// Shortest-path lengths from a set of sources to every node
///
/// Row `i` holds the distances from `sources()[i]`; unreachable targets are
/// `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    sources: Vec<NodeId>,
    num_nodes: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Source node of each row
    #[must_use]
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }

    /// Number of rows
    #[must_use]
    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    /// Number of columns (graph nodes)
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Distances from the `i`-th source
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.num_nodes)?;
        let end = start.checked_add(self.num_nodes)?;
        self.distances.get(start..end)
    }

    /// Iterate `(source, distances)` rows
    pub fn rows(&self) -> impl Iterator<Item = (NodeId, &[f64])> + '_ {
        self.sources
            .iter()
            .copied()
            .zip(self.distances.chunks_exact(self.num_nodes.max(1)))
    }

    /// Distance from the `i`-th source to `target`
    #[must_use]
    pub fn get(&self, i: usize, target: NodeId) -> Option<f64> {
        self.row(i)?.get(target.index()).copied()
    }

    /// Distance from `source` to `target`, if `source` is one of the rows
    #[must_use]
    pub fn distance(&self, source: NodeId, target: NodeId) -> Option<f64> {
        let i = self.sources.iter().position(|&s| s == source)?;
        self.get(i, target)
    }

    /// For each target node, the sum of its distances from every source
    ///
    /// Any unreachable pair makes the sum `f64::INFINITY`.
    #[must_use]
    pub fn distance_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.num_nodes];
        for (_, row) in self.rows() {
            for (sum, d) in sums.iter_mut().zip(row) {
                *sum += d;
            }
        }
        sums
    }
}

/// Seam between the closeness estimator and the distance computation
pub trait ShortestPathSolver {
    /// Distances from each of `sources` to every node
    ///
    /// # Errors
    ///
    /// Implementations return [`GraphError`] values wrapped in `anyhow`.
    fn shortest_paths(
        &self,
        graph: &CsrGraph,
        sources: &[NodeId],
        config: &PathConfig,
    ) -> Result<DistanceMatrix>;
}

/// Default solver backed by [`shortest_paths`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SparseSolver;

impl ShortestPathSolver for SparseSolver {
    fn shortest_paths(
        &self,
        graph: &CsrGraph,
        sources: &[NodeId],
        config: &PathConfig,
    ) -> Result<DistanceMatrix> {
        shortest_paths(graph, sources, config)
    }
}

/// Compute shortest-path distances from every source to every node
///
/// Each source is solved independently; with a worker hint the runs are
/// spread over a rayon pool and collected back in source order, so results
/// do not depend on scheduling.
///
/// # Errors
///
/// - `InvalidArgument` for a non-square graph, an empty source list, or a
///   negative weight under Dijkstra
/// - `NodeOutOfBounds` for a source outside the graph
/// - `ThreadPool` if the worker pool cannot be created
///
/// # Complexity
///
/// O(|sources| · (V + E)) with hop counting,
/// O(|sources| · (V + E) log V) with Dijkstra
pub fn shortest_paths(
    graph: &CsrGraph,
    sources: &[NodeId],
    config: &PathConfig,
) -> Result<DistanceMatrix> {
    validate(graph, sources, config)?;

    let n = graph.num_nodes();
    let hops = config.counts_hops(graph);

    debug!(
        sources = sources.len(),
        nodes = n,
        directed = config.directed,
        hops,
        workers = ?config.workers,
        "computing shortest paths"
    );

    let rows = run_per_source(sources, config.workers, |source| {
        single_source(graph, source, config.directed, hops).0
    })?;

    Ok(DistanceMatrix {
        sources: sources.to_vec(),
        num_nodes: n,
        distances: rows.concat(),
    })
}

/// Find the shortest path between two nodes
///
/// # Returns
///
/// * `Some((distance, path))` if a path exists, `path` running from
///   `source` to `target` inclusive
/// * `None` if `target` is unreachable from `source`
///
/// # Errors
///
/// Same argument checks as [`shortest_paths`].
///
/// # Example
///
/// ```
/// use trueno_centrality::{shortest_path_between, CsrGraph, NodeId, PathConfig};
///
/// let graph = CsrGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1), 4.0),
///     (NodeId(0), NodeId(2), 1.0),
///     (NodeId(2), NodeId(1), 2.0),
/// ])
/// .unwrap();
///
/// let (dist, path) = shortest_path_between(&graph, NodeId(0), NodeId(1), &PathConfig::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(dist, 3.0);
/// assert_eq!(path, vec![NodeId(0), NodeId(2), NodeId(1)]);
/// ```
pub fn shortest_path_between(
    graph: &CsrGraph,
    source: NodeId,
    target: NodeId,
    config: &PathConfig,
) -> Result<Option<(f64, Vec<NodeId>)>> {
    validate(graph, &[source], config)?;
    graph.ensure_node(target)?;

    let (distances, predecessors) =
        single_source(graph, source, config.directed, config.counts_hops(graph));

    let dist = distances[target.index()];
    if dist.is_infinite() {
        return Ok(None);
    }

    let mut path = vec![target];
    let mut current = target.index();
    while let Some(pred) = predecessors[current] {
        path.push(NodeId(pred));
        current = pred as usize;
    }
    path.reverse();

    Ok(Some((dist, path)))
}

fn validate(graph: &CsrGraph, sources: &[NodeId], config: &PathConfig) -> Result<(), GraphError> {
    graph.ensure_square("shortest paths")?;
    if sources.is_empty() {
        return Err(GraphError::invalid("at least one source node is required"));
    }
    for &source in sources {
        graph.ensure_node(source)?;
    }

    if !config.counts_hops(graph) {
        let (_, _, weights) = graph.csr_components();
        if let Some(w) = weights.iter().find(|w| **w < 0.0) {
            return Err(GraphError::invalid(format!(
                "Dijkstra needs non-negative weights, found {w}"
            )));
        }
    }
    Ok(())
}

/// Run `job` once per source, sequentially or on a rayon pool
fn run_per_source<T, F>(sources: &[NodeId], workers: Option<i32>, job: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(NodeId) -> T + Sync,
{
    let Some(hint) = workers else {
        return Ok(sources.iter().map(|&s| job(s)).collect());
    };

    // 0 lets rayon pick every available thread
    let threads = usize::try_from(hint).unwrap_or(0);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| GraphError::ThreadPool(e.to_string()))?;

    trace!(threads = pool.current_num_threads(), "worker pool ready");

    Ok(pool.install(|| sources.par_iter().map(|&s| job(s)).collect()))
}

/// Distances and shortest-path-tree parents from one source
fn single_source(
    graph: &CsrGraph,
    source: NodeId,
    directed: bool,
    hops: bool,
) -> (Vec<f64>, Vec<Option<u32>>) {
    if hops {
        hop_distances(graph, source, directed)
    } else {
        dijkstra(graph, source, directed)
    }
}

#[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
fn hop_distances(
    graph: &CsrGraph,
    source: NodeId,
    directed: bool,
) -> (Vec<f64>, Vec<Option<u32>>) {
    let n = graph.num_nodes();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut queue = VecDeque::new();

    distances[source.index()] = 0.0;
    queue.push_back(source.index());

    while let Some(current) = queue.pop_front() {
        let next = distances[current] + 1.0;
        for neighbor in graph.neighbors(current, directed) {
            let idx = neighbor as usize;
            if distances[idx].is_infinite() {
                distances[idx] = next;
                predecessors[idx] = Some(current as u32);
                queue.push_back(idx);
            }
        }
    }

    (distances, predecessors)
}

/// State for Dijkstra's priority queue
#[derive(Clone, Copy)]
struct State {
    cost: f64,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn dijkstra(graph: &CsrGraph, source: NodeId, directed: bool) -> (Vec<f64>, Vec<Option<u32>>) {
    let n = graph.num_nodes();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[source.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source.index(),
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry: a shorter path was already settled
        if cost > distances[node] {
            continue;
        }

        let (targets, weights) = graph.out_row(node);
        let incoming: (&[u32], &[f64]) = if directed {
            (&[], &[])
        } else {
            graph.in_row(node)
        };

        let edges = targets
            .iter()
            .zip(weights)
            .chain(incoming.0.iter().zip(incoming.1));

        for (&neighbor, &weight) in edges {
            let idx = neighbor as usize;
            let next_cost = cost + weight;
            if next_cost < distances[idx] {
                distances[idx] = next_cost;
                predecessors[idx] = Some(node as u32);
                heap.push(State {
                    cost: next_cost,
                    node: idx,
                });
            }
        }
    }

    (distances, predecessors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(edges: &[(u32, u32, f64)]) -> CsrGraph {
        let pairs: Vec<_> = edges
            .iter()
            .map(|&(s, d, w)| (NodeId(s), NodeId(d), w))
            .collect();
        CsrGraph::from_edge_list(&pairs).unwrap()
    }

    fn row_from(graph: &CsrGraph, source: u32, config: &PathConfig) -> Vec<f64> {
        let matrix = shortest_paths(graph, &[NodeId(source)], config).unwrap();
        matrix.row(0).unwrap().to_vec()
    }

    #[test]
    fn test_single_edge() {
        let graph = weighted(&[(0, 1, 5.0)]);
        assert_eq!(row_from(&graph, 0, &PathConfig::default()), vec![0.0, 5.0]);
    }

    #[test]
    fn test_chain() {
        // 0 --1.0--> 1 --2.0--> 2
        let graph = weighted(&[(0, 1, 1.0), (1, 2, 2.0)]);
        assert_eq!(
            row_from(&graph, 0, &PathConfig::default()),
            vec![0.0, 1.0, 3.0]
        );
    }

    #[test]
    fn test_shorter_path_via_intermediate() {
        let graph = weighted(&[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
        assert_eq!(row_from(&graph, 0, &PathConfig::default())[2], 3.0);
    }

    #[test]
    fn test_unreachable_is_infinite() {
        // 0 → 1, 2 → 3 (disconnected)
        let graph = weighted(&[(0, 1, 1.0), (2, 3, 1.0)]);
        let row = row_from(&graph, 0, &PathConfig::default());
        assert_eq!(row[..2], [0.0, 1.0]);
        assert!(row[2].is_infinite() && row[2] > 0.0);
        assert!(row[3].is_infinite());
        assert!(row.iter().all(|d| !d.is_nan()));
    }

    #[test]
    fn test_directed_respects_edge_direction() {
        let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
        let row = row_from(&graph, 2, &PathConfig::default());
        assert_eq!(row, vec![f64::INFINITY, f64::INFINITY, 0.0]);

        let row = row_from(&graph, 2, &PathConfig::default().directed(false));
        assert_eq!(row, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_undirected_takes_cheaper_direction() {
        let graph = weighted(&[(0, 1, 5.0), (1, 0, 2.0)]);
        let config = PathConfig::default().directed(false);
        assert_eq!(row_from(&graph, 0, &config), vec![0.0, 2.0]);
        assert_eq!(row_from(&graph, 1, &config), vec![2.0, 0.0]);
    }

    #[test]
    fn test_cycle_in_graph() {
        // Cycle: 0 → 1 → 2 → 0, with 0 → 3
        let graph = weighted(&[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (0, 3, 10.0)]);
        assert_eq!(
            row_from(&graph, 0, &PathConfig::default()),
            vec![0.0, 1.0, 2.0, 10.0]
        );
    }

    #[test]
    fn test_zero_weight_edge() {
        let graph = weighted(&[(0, 1, 0.0), (1, 2, 0.0)]);
        assert_eq!(
            row_from(&graph, 0, &PathConfig::default()),
            vec![0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_self_loop_never_shortens_source() {
        let graph = weighted(&[(0, 0, 3.0), (0, 1, 1.0)]);
        assert_eq!(row_from(&graph, 0, &PathConfig::default()), vec![0.0, 1.0]);
    }

    #[test]
    fn test_hop_counting_ignores_weights() {
        let graph = weighted(&[(0, 1, 4.0), (1, 2, 4.0), (0, 2, 20.0)]);

        let hops = PathConfig::default().unweighted(true);
        assert_eq!(row_from(&graph, 0, &hops), vec![0.0, 1.0, 1.0]);

        let bfs = PathConfig::default().method(PathMethod::BreadthFirst);
        assert_eq!(row_from(&graph, 0, &bfs), vec![0.0, 1.0, 1.0]);

        let dijkstra = PathConfig::default().method(PathMethod::Dijkstra);
        assert_eq!(row_from(&graph, 0, &dijkstra), vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_auto_matches_dijkstra_on_unit_weights() {
        let graph = CsrGraph::from_pairs(5, &[(0, 1), (1, 2), (0, 3), (3, 4), (4, 2)]).unwrap();
        let auto = row_from(&graph, 0, &PathConfig::default());
        let dijkstra = row_from(
            &graph,
            0,
            &PathConfig::default().method(PathMethod::Dijkstra),
        );
        assert_eq!(auto, dijkstra);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let graph = weighted(&[(0, 1, -1.0)]);
        let err = shortest_paths(&graph, &[NodeId(0)], &PathConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::InvalidArgument(_))
        ));

        // Hop counting never looks at the weights
        let hops = PathConfig::default().unweighted(true);
        assert!(shortest_paths(&graph, &[NodeId(0)], &hops).is_ok());
    }

    #[test]
    fn test_empty_sources_rejected() {
        let graph = weighted(&[(0, 1, 1.0)]);
        let err = shortest_paths(&graph, &[], &PathConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_source_out_of_bounds() {
        let graph = weighted(&[(0, 1, 1.0)]);
        let err = shortest_paths(&graph, &[NodeId(100)], &PathConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::NodeOutOfBounds { node: 100, .. })
        ));
    }

    #[test]
    fn test_non_square_rejected() {
        let graph = CsrGraph::from_triplets(2, 3, &[(0, 2, 1.0)]).unwrap();
        let err = shortest_paths(&graph, &[NodeId(0)], &PathConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_matrix_accessors() {
        let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let matrix =
            shortest_paths(&graph, &[NodeId(2), NodeId(0)], &PathConfig::default()).unwrap();

        assert_eq!(matrix.num_sources(), 2);
        assert_eq!(matrix.num_nodes(), 3);
        assert_eq!(matrix.sources(), &[NodeId(2), NodeId(0)]);
        assert_eq!(matrix.get(0, NodeId(1)), Some(2.0));
        assert_eq!(matrix.distance(NodeId(0), NodeId(2)), Some(2.0));
        assert_eq!(matrix.distance(NodeId(1), NodeId(2)), None);
        assert_eq!(matrix.row(2), None);
        assert_eq!(matrix.rows().count(), 2);

        // Column sums: node 0 ← {1 from 2, 0 from 0}, node 1 ← {2, 1}, node 2 ← {0, 2}
        assert_eq!(matrix.distance_sums(), vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_matrix_huge_row_index_is_none() {
        let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let matrix = shortest_paths(&graph, &[NodeId(0)], &PathConfig::default()).unwrap();

        // i * 3 fits in usize, i * 3 + 3 does not
        assert_eq!(matrix.row(usize::MAX / 3), None);
        assert_eq!(matrix.row(usize::MAX), None);
        assert_eq!(matrix.get(usize::MAX / 3, NodeId(0)), None);
    }

    #[test]
    fn test_distance_sums_propagate_infinity() {
        let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
        let matrix =
            shortest_paths(&graph, &[NodeId(0), NodeId(1)], &PathConfig::default()).unwrap();
        let sums = matrix.distance_sums();
        assert!(sums[0].is_infinite());
        assert_eq!(sums[1..], [1.0, 3.0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pairs: Vec<_> = (0..40_u32).map(|i| (i, (i * 7 + 3) % 40)).collect();
        let graph = CsrGraph::from_pairs(40, &pairs).unwrap();
        let sources: Vec<_> = (0..40).map(NodeId).collect();

        let sequential = shortest_paths(&graph, &sources, &PathConfig::default()).unwrap();
        for workers in [Some(-1), Some(0), Some(1), Some(3)] {
            let config = PathConfig::default().workers(workers);
            let parallel = shortest_paths(&graph, &sources, &config).unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_path_between_simple() {
        let graph = weighted(&[(0, 1, 1.0), (1, 2, 2.0)]);
        let (dist, path) =
            shortest_path_between(&graph, NodeId(0), NodeId(2), &PathConfig::default())
                .unwrap()
                .unwrap();
        assert_eq!(dist, 3.0);
        assert_eq!(path, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_path_between_same_node() {
        let graph = weighted(&[(0, 1, 1.0)]);
        let result =
            shortest_path_between(&graph, NodeId(0), NodeId(0), &PathConfig::default()).unwrap();
        assert_eq!(result, Some((0.0, vec![NodeId(0)])));
    }

    #[test]
    fn test_path_between_unreachable() {
        let graph = weighted(&[(0, 1, 1.0), (2, 3, 1.0)]);
        let result =
            shortest_path_between(&graph, NodeId(0), NodeId(3), &PathConfig::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_diamond_shortest_path() {
        //     1
        //    / \
        //   0   3  (0→1: 1, 1→3: 1, 0→2: 2, 2→3: 5)
        //    \ /
        //     2
        let graph = weighted(&[(0, 1, 1.0), (0, 2, 2.0), (1, 3, 1.0), (2, 3, 5.0)]);
        let (dist, path) =
            shortest_path_between(&graph, NodeId(0), NodeId(3), &PathConfig::default())
                .unwrap()
                .unwrap();
        assert_eq!(dist, 2.0);
        assert_eq!(path, vec![NodeId(0), NodeId(1), NodeId(3)]);
    }

    #[test]
    fn test_path_between_target_out_of_bounds() {
        let graph = weighted(&[(0, 1, 1.0)]);
        assert!(
            shortest_path_between(&graph, NodeId(0), NodeId(9), &PathConfig::default()).is_err()
        );
    }

    #[test]
    fn test_sparse_solver_delegates() {
        let graph = CsrGraph::from_pairs(2, &[(0, 1)]).unwrap();
        let via_trait = SparseSolver
            .shortest_paths(&graph, &[NodeId(0)], &PathConfig::default())
            .unwrap();
        let direct = shortest_paths(&graph, &[NodeId(0)], &PathConfig::default()).unwrap();
        assert_eq!(via_trait, direct);
    }
}
