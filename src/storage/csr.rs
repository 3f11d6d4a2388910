//! CSR (Compressed Sparse Row) adjacency representation
//!
//! Based on `GraphBLAST` (Yang et al., ACM `ToMS` 2022) sparse matrix layout.
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 2
//!
//! CSR:
//!   row_offsets: [0, 2, 3, 3]  // Node 0: edges [0..2), Node 1: [2..3), Node 2: [3..3)
//!   col_indices: [1, 2, 2]      // Edge 0 → node 1, edge 1 → node 2, edge 2 → node 2
//!   edge_weights: [1.0, 1.0, 1.0]
//! ```
//!
//! Rows are kept canonical: column indices ascending, duplicate `(row, col)`
//! entries merged by summing their weights. Traversal tie-breaking relies on
//! that ordering.

use crate::error::GraphError;
use anyhow::Result;

/// Node identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into per-node vectors
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Row-adjacency lists, one `(column, weight)` list per row
type AdjacencyLists = Vec<Vec<(u32, f64)>>;

/// Immutable sparse adjacency matrix in CSR form
///
/// Keeps both a forward CSR (outgoing edges) and a reverse CSR (incoming
/// edges) so undirected traversal and weak-connectivity checks never have to
/// transpose the matrix on the fly.
///
/// The `directed` flag is supplied by the caller and is never inferred from
/// the matrix contents.
///
/// # Example
///
/// ```
/// use trueno_centrality::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list(&[
///     (NodeId(0), NodeId(2), 1.0),
///     (NodeId(0), NodeId(1), 1.0),
/// ])
/// .unwrap();
///
/// // Columns come back sorted regardless of insertion order
/// assert_eq!(graph.outgoing_neighbors(NodeId(0)).unwrap(), &[1, 2]);
/// assert!(graph.is_directed());
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Forward CSR: row `i` spans `col_indices[row_offsets[i]..row_offsets[i + 1]]`
    row_offsets: Vec<u32>,
    col_indices: Vec<u32>,
    edge_weights: Vec<f64>,

    /// Reverse CSR, indexed by column
    rev_row_offsets: Vec<u32>,
    rev_col_indices: Vec<u32>,
    rev_edge_weights: Vec<f64>,

    num_rows: usize,
    num_cols: usize,
    directed: bool,
}

impl CsrGraph {
    /// Create new empty (0 × 0, directed) graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_offsets: vec![0],
            col_indices: Vec::new(),
            edge_weights: Vec::new(),
            rev_row_offsets: vec![0],
            rev_col_indices: Vec::new(),
            rev_edge_weights: Vec::new(),
            num_rows: 0,
            num_cols: 0,
            directed: true,
        }
    }

    /// Create square graph from edge list, sized by the largest node ID
    ///
    /// Use [`CsrGraph::with_num_nodes`] when trailing nodes have no edges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a weight is not finite
    pub fn from_edge_list(edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
        let num_nodes = edges
            .iter()
            .flat_map(|(src, dst, _)| [src.index(), dst.index()])
            .max()
            .map_or(0, |max_node| max_node + 1);

        Self::with_num_nodes(num_nodes, edges)
    }

    /// Create square graph over exactly `num_nodes` nodes
    ///
    /// # Errors
    ///
    /// Returns `NodeOutOfBounds` if an endpoint is `>= num_nodes`, or
    /// `InvalidArgument` if a weight is not finite
    pub fn with_num_nodes(num_nodes: usize, edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
        let triplets: Vec<_> = edges.iter().map(|(s, d, w)| (s.0, d.0, *w)).collect();
        Self::from_triplets(num_nodes, num_nodes, &triplets)
    }

    /// Create square unit-weight graph from `(source, target)` pairs
    ///
    /// # Errors
    ///
    /// Returns `NodeOutOfBounds` if an endpoint is `>= num_nodes`
    pub fn from_pairs(num_nodes: usize, pairs: &[(u32, u32)]) -> Result<Self> {
        let triplets: Vec<_> = pairs.iter().map(|&(s, d)| (s, d, 1.0)).collect();
        Self::from_triplets(num_nodes, num_nodes, &triplets)
    }

    /// Create a (possibly rectangular) sparse matrix from `(row, col, value)`
    /// triplets
    ///
    /// Duplicate entries are summed. Explicit zero weights are kept as
    /// zero-length edges.
    ///
    /// # Errors
    ///
    /// Returns `NodeOutOfBounds` for an index outside the shape, or
    /// `InvalidArgument` for a non-finite weight
    pub fn from_triplets(
        num_rows: usize,
        num_cols: usize,
        triplets: &[(u32, u32, f64)],
    ) -> Result<Self> {
        let mut adj_list: AdjacencyLists = vec![Vec::new(); num_rows];

        for &(row, col, weight) in triplets {
            if row as usize >= num_rows {
                return Err(GraphError::out_of_bounds(row, num_rows).into());
            }
            if col as usize >= num_cols {
                return Err(GraphError::out_of_bounds(col, num_cols).into());
            }
            if !weight.is_finite() {
                return Err(GraphError::invalid(format!(
                    "edge ({row}, {col}) has non-finite weight {weight}"
                ))
                .into());
            }
            adj_list[row as usize].push((col, weight));
        }

        // Canonical rows: stable sort keeps insertion order for the sum
        for neighbors in &mut adj_list {
            neighbors.sort_by_key(|&(col, _)| col);
            neighbors.dedup_by(|next, kept| {
                if next.0 == kept.0 {
                    kept.1 += next.1;
                    true
                } else {
                    false
                }
            });
        }

        // Rows are visited in ascending order, so reverse rows come out sorted
        let mut rev_adj_list: AdjacencyLists = vec![Vec::new(); num_cols];
        for (row, neighbors) in adj_list.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
            let row_u32 = row as u32;
            for &(col, weight) in neighbors {
                rev_adj_list[col as usize].push((row_u32, weight));
            }
        }

        let (row_offsets, col_indices, edge_weights) = compress(&adj_list);
        let (rev_row_offsets, rev_col_indices, rev_edge_weights) = compress(&rev_adj_list);

        Ok(Self {
            row_offsets,
            col_indices,
            edge_weights,
            rev_row_offsets,
            rev_col_indices,
            rev_edge_weights,
            num_rows,
            num_cols,
            directed: true,
        })
    }

    /// Same storage, flagged as undirected
    ///
    /// Algorithms then follow every stored edge in both directions; the
    /// matrix does not have to be symmetric.
    #[must_use]
    pub const fn undirected(self) -> Self {
        self.with_directed(false)
    }

    /// Same storage, with an explicit `directed` flag
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Get outgoing neighbors of a node
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[u32]> {
        self.adjacency(node).map(|(targets, _)| targets)
    }

    /// Get incoming neighbors of a node
    ///
    /// Returns O(1) access to incoming edges via reverse CSR.
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn incoming_neighbors(&self, target: NodeId) -> Result<&[u32]> {
        self.incoming_adjacency(target).map(|(sources, _)| sources)
    }

    /// Outgoing edge targets and their weights
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn adjacency(&self, node: NodeId) -> Result<(&[u32], &[f64])> {
        self.ensure_node(node)?;
        Ok(self.out_row(node.index()))
    }

    /// Incoming edge sources and their weights
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn incoming_adjacency(&self, node: NodeId) -> Result<(&[u32], &[f64])> {
        if node.index() >= self.num_cols {
            return Err(GraphError::out_of_bounds(node.0, self.num_cols).into());
        }
        Ok(self.in_row(node.index()))
    }

    /// Number of nodes (rows)
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_rows
    }

    /// Number of stored (merged) entries
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// Matrix shape `(rows, cols)`
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// `true` when rows == cols
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Caller-supplied directedness
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// `true` when every stored weight is exactly 1.0
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact unit weights, not a tolerance check
    pub fn is_unweighted(&self) -> bool {
        self.edge_weights.iter().all(|&w| w == 1.0)
    }

    /// Get CSR components `(row_offsets, col_indices, edge_weights)`
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32], &[f64]) {
        (&self.row_offsets, &self.col_indices, &self.edge_weights)
    }

    /// Fail with `InvalidArgument` unless the matrix is square
    pub(crate) fn ensure_square(&self, operation: &str) -> Result<(), GraphError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(GraphError::invalid(format!(
                "{operation} needs a square adjacency, got {} x {}",
                self.num_rows, self.num_cols
            )))
        }
    }

    /// Fail with `NodeOutOfBounds` unless `node` is a valid row
    pub(crate) fn ensure_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() < self.num_rows {
            Ok(())
        } else {
            Err(GraphError::out_of_bounds(node.0, self.num_rows))
        }
    }

    /// Unchecked forward row; `node < num_rows`
    pub(crate) fn out_row(&self, node: usize) -> (&[u32], &[f64]) {
        let start = self.row_offsets[node] as usize;
        let end = self.row_offsets[node + 1] as usize;
        (&self.col_indices[start..end], &self.edge_weights[start..end])
    }

    /// Unchecked reverse row; `node < num_cols`
    pub(crate) fn in_row(&self, node: usize) -> (&[u32], &[f64]) {
        let start = self.rev_row_offsets[node] as usize;
        let end = self.rev_row_offsets[node + 1] as usize;
        (
            &self.rev_col_indices[start..end],
            &self.rev_edge_weights[start..end],
        )
    }

    /// Traversable neighbors of `node` in ascending order
    ///
    /// With `directed == false` this is the sorted, de-duplicated union of
    /// outgoing and incoming neighbors, merged lazily from the two rows.
    /// Square graphs only.
    pub(crate) fn neighbors(&self, node: usize, directed: bool) -> Neighbors<'_> {
        let (out, _) = self.out_row(node);
        let inc = if directed { &[][..] } else { self.in_row(node).0 };
        Neighbors { out, inc }
    }

    /// Same nodes with every edge reversed
    ///
    /// Forward and reverse CSR swap roles, so no re-sorting happens. The
    /// `directed` flag is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_centrality::{CsrGraph, NodeId};
    ///
    /// let graph = CsrGraph::from_pairs(3, &[(0, 1), (0, 2)]).unwrap();
    /// let reversed = graph.transpose();
    ///
    /// assert_eq!(reversed.outgoing_neighbors(NodeId(2)).unwrap(), &[0]);
    /// assert_eq!(reversed.incoming_neighbors(NodeId(0)).unwrap(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            row_offsets: self.rev_row_offsets.clone(),
            col_indices: self.rev_col_indices.clone(),
            edge_weights: self.rev_edge_weights.clone(),
            rev_row_offsets: self.row_offsets.clone(),
            rev_col_indices: self.col_indices.clone(),
            rev_edge_weights: self.edge_weights.clone(),
            num_rows: self.num_cols,
            num_cols: self.num_rows,
            directed: self.directed,
        }
    }
}

/// Ascending merge of two sorted neighbor rows, duplicates yielded once
#[derive(Debug, Clone)]
pub(crate) struct Neighbors<'a> {
    out: &'a [u32],
    inc: &'a [u32],
}

impl Iterator for Neighbors<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let next = match (self.out.first(), self.inc.first()) {
            (None, None) => return None,
            (Some(&a), None) => a,
            (None, Some(&b)) => b,
            (Some(&a), Some(&b)) => a.min(b),
        };
        if self.out.first() == Some(&next) {
            self.out = &self.out[1..];
        }
        if self.inc.first() == Some(&next) {
            self.inc = &self.inc[1..];
        }
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a, b) = (self.out.len(), self.inc.len());
        (a.max(b), Some(a + b))
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten adjacency lists into `(offsets, indices, weights)`
fn compress(lists: &[Vec<(u32, f64)>]) -> (Vec<u32>, Vec<u32>, Vec<f64>) {
    let total: usize = lists.iter().map(Vec::len).sum();
    let mut offsets = Vec::with_capacity(lists.len() + 1);
    let mut indices = Vec::with_capacity(total);
    let mut weights = Vec::with_capacity(total);

    let mut offset = 0_u32;
    offsets.push(offset);

    for neighbors in lists {
        #[allow(clippy::cast_possible_truncation)] // Graphs >4B edges not supported
        let len_u32 = neighbors.len() as u32;
        offset += len_u32;
        offsets.push(offset);

        for &(index, weight) in neighbors {
            indices.push(index);
            weights.push(weight);
        }
    }

    (offsets, indices, weights)
}
