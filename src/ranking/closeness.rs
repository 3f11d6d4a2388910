//! Closeness centrality, exact or sampled
//!
//! Score of node `v` over a set of `k` source nodes:
//!
//! ```text
//! C(v) = ((n - 1) · k / n) / Σ_{s ∈ sources} d(s, v)
//! ```
//!
//! With every node as a source (`k = n`) this is the classical
//! `(n - 1) / Σ_u d(u, v)`. The approximate mode samples
//! `k = min(⌊ln(n) / ε²⌋, n)` sources uniformly without replacement, which
//! bounds the per-node error by `ε` with constant probability.
//!
//! For directed graphs distances run from the sources to the scored node:
//! a node is central when the rest of the graph reaches it cheaply.
//!
//! # References
//!
//! - Eppstein & Wang (2004). "Fast approximation of centrality",
//!   Journal of Graph Algorithms and Applications 8(1)
//! - Bavelas (1950). "Communication patterns in task-oriented groups"

use crate::algorithms::shortest_path::{PathConfig, ShortestPathSolver, SparseSolver};
use crate::algorithms::structure::is_connected;
use crate::error::GraphError;
use crate::storage::{CsrGraph, NodeId};
use anyhow::Result;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default tolerance for [`Method::Approximate`]
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Default seed for source sampling
pub const DEFAULT_SEED: u64 = 42;

/// How source nodes are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Every node is a source
    #[default]
    Exact,
    /// Eppstein–Wang sample of source nodes
    Approximate,
}

impl FromStr for Method {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "approximate" => Ok(Self::Approximate),
            other => Err(GraphError::invalid(format!(
                "Method should be either 'exact' or 'approximate', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Approximate => "approximate",
        })
    }
}

/// Closeness centrality configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosenessConfig {
    /// Exact or sampled
    pub method: Method,
    /// Allowed error per score entry; only read by [`Method::Approximate`]
    pub tolerance: f64,
    /// Worker hint passed to the shortest-path runs (see [`PathConfig::workers`])
    pub workers: Option<i32>,
    /// Seed for the sampler used by [`closeness`] and [`Closeness::fit`]
    pub seed: u64,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            method: Method::Exact,
            tolerance: DEFAULT_TOLERANCE,
            workers: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl ClosenessConfig {
    /// Exact scores (every node is a source)
    #[must_use]
    pub fn exact() -> Self {
        Self::default()
    }

    /// Sampled scores within `tolerance`
    #[must_use]
    pub fn approximate(tolerance: f64) -> Self {
        Self {
            method: Method::Approximate,
            tolerance,
            ..Self::default()
        }
    }

    /// Set the method
    #[must_use]
    pub const fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the tolerance
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the worker hint
    #[must_use]
    pub const fn workers(mut self, workers: Option<i32>) -> Self {
        self.workers = workers;
        self
    }

    /// Set the sampling seed
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Scores plus the sample they were computed from
#[derive(Debug, Clone, PartialEq)]
pub struct ClosenessResult {
    /// One score per node
    pub scores: Vec<f64>,
    /// Number of source nodes used
    pub sample_size: usize,
    /// Source nodes, ascending
    pub sources: Vec<NodeId>,
}

/// Number of sources used for a graph of `n` nodes
///
/// `n` for [`Method::Exact`], `min(⌊ln(n) / tolerance²⌋, n)` for
/// [`Method::Approximate`].
///
/// # Example
///
/// ```
/// use trueno_centrality::{sample_size, Method};
///
/// // ln(100) / 0.5² = 18.42
/// assert_eq!(sample_size(100, Method::Approximate, 0.5), 18);
/// // Tight tolerance degenerates to exact
/// assert_eq!(sample_size(100, Method::Approximate, 0.01), 100);
/// assert_eq!(sample_size(100, Method::Exact, 0.5), 100);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn sample_size(n: usize, method: Method, tolerance: f64) -> usize {
    match method {
        Method::Exact => n,
        Method::Approximate if n == 0 => 0,
        // Float-to-int `as` saturates, so a tiny tolerance just clamps to n
        Method::Approximate => {
            (((n as f64).ln() / tolerance.powi(2)).floor() as usize).min(n)
        }
    }
}

/// Closeness centrality of every node, sampling with `config.seed`
///
/// # Errors
///
/// See [`closeness_with_rng`].
///
/// # Example
///
/// ```
/// use trueno_centrality::{closeness, ClosenessConfig, CsrGraph};
///
/// // Rock-paper-scissors: 0 → 1 → 2 → 0
/// let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
///
/// let result = closeness(&graph, &ClosenessConfig::exact()).unwrap();
/// for score in result.scores {
///     assert!((score - 2.0 / 3.0).abs() < 1e-12);
/// }
/// ```
pub fn closeness(graph: &CsrGraph, config: &ClosenessConfig) -> Result<ClosenessResult> {
    let mut rng = XorShiftRng::seed_from_u64(config.seed);
    closeness_with_rng(graph, config, &mut rng, &SparseSolver)
}

/// Closeness centrality with an injected random source and path solver
///
/// Every precondition is checked before sampling or calling `solver`.
///
/// # Edge cases
///
/// - A single-node graph scores `[0.0]`; an approximate run on it samples
///   no source.
/// - A node whose distance sum is zero (zero-weight edges, or an
///   approximate sample made of that node alone) scores `0.0`.
/// - A node some source cannot reach (directed, weakly connected graphs) has
///   an infinite distance sum and scores `0.0`.
///
/// # Errors
///
/// - `InvalidArgument`: non-square adjacency, empty graph, tolerance that is
///   not a positive finite number, or a tolerance so coarse that no source
///   would be sampled
/// - `PreconditionFailed`: graph is not (weakly) connected
/// - anything `solver` returns
pub fn closeness_with_rng<R, S>(
    graph: &CsrGraph,
    config: &ClosenessConfig,
    rng: &mut R,
    solver: &S,
) -> Result<ClosenessResult>
where
    R: Rng + ?Sized,
    S: ShortestPathSolver + ?Sized,
{
    if !graph.is_square() {
        let (rows, cols) = graph.shape();
        return Err(GraphError::invalid(format!(
            "The adjacency is not square ({rows} x {cols}). \
             Convert bipartite input to a square adjacency first."
        ))
        .into());
    }

    let n = graph.num_nodes();
    if n == 0 {
        return Err(GraphError::invalid("closeness needs at least one node").into());
    }
    if !is_connected(graph) {
        let err = GraphError::PreconditionFailed("The graph must be connected.".into());
        return Err(err.into());
    }
    if config.method == Method::Approximate
        && !(config.tolerance.is_finite() && config.tolerance > 0.0)
    {
        return Err(GraphError::invalid(format!(
            "tolerance must be a positive number, got {}",
            config.tolerance
        ))
        .into());
    }

    let k = sample_size(n, config.method, config.tolerance);
    if n == 1 {
        // ln(1) = 0, so an approximate run samples nothing
        debug!(sample_size = k, "single-node graph, closeness defined as 0");
        return Ok(ClosenessResult {
            scores: vec![0.0],
            sample_size: k,
            sources: vec![NodeId(0); k],
        });
    }

    if k == 0 {
        return Err(GraphError::invalid(format!(
            "tolerance {} is too large to sample any of {n} nodes",
            config.tolerance
        ))
        .into());
    }

    let sources = draw_sources(n, k, config.method, rng);
    debug!(
        method = %config.method,
        nodes = n,
        sample_size = k,
        directed = graph.is_directed(),
        "computing closeness"
    );

    let path_config = PathConfig::default()
        .directed(graph.is_directed())
        .workers(config.workers);
    let matrix = solver.shortest_paths(graph, &sources, &path_config)?;

    #[allow(clippy::cast_precision_loss)]
    let scale = (n - 1) as f64 * k as f64 / n as f64;

    let sums = matrix.distance_sums();
    let zero_sums = sums.iter().filter(|&&sum| sum == 0.0).count();
    if zero_sums > 0 {
        debug!(zero_sums, "nodes with zero distance sum scored 0");
    }

    let scores = sums
        .into_iter()
        .map(|sum| {
            if sum > 0.0 && sum.is_finite() {
                scale / sum
            } else {
                0.0
            }
        })
        .collect();

    Ok(ClosenessResult {
        scores,
        sample_size: k,
        sources,
    })
}

#[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
fn draw_sources<R: Rng + ?Sized>(n: usize, k: usize, method: Method, rng: &mut R) -> Vec<NodeId> {
    let mut picked: Vec<usize> = match method {
        Method::Exact => (0..n).collect(),
        Method::Approximate => index::sample(rng, n, k).into_vec(),
    };
    picked.sort_unstable();
    picked.into_iter().map(|i| NodeId(i as u32)).collect()
}

/// Closeness estimator holding the scores of the last `fit`
///
/// # Example
///
/// ```
/// use trueno_centrality::{Closeness, ClosenessConfig, CsrGraph};
///
/// let graph = CsrGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap().undirected();
///
/// let mut estimator = Closeness::new(ClosenessConfig::exact());
/// let scores = estimator.fit(&graph).unwrap();
/// assert_eq!(scores, &[2.0 / 3.0, 1.0, 2.0 / 3.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Closeness {
    config: ClosenessConfig,
    result: Option<ClosenessResult>,
}

impl Closeness {
    /// Estimator with the given configuration and no scores yet
    #[must_use]
    pub const fn new(config: ClosenessConfig) -> Self {
        Self {
            config,
            result: None,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ClosenessConfig {
        &self.config
    }

    /// Compute scores, replacing the previous ones
    ///
    /// # Errors
    ///
    /// See [`closeness_with_rng`]. On error no scores are kept.
    pub fn fit(&mut self, graph: &CsrGraph) -> Result<&[f64]> {
        let mut rng = XorShiftRng::seed_from_u64(self.config.seed);
        self.fit_with_rng(graph, &mut rng)
    }

    /// Compute scores drawing samples from `rng`
    ///
    /// # Errors
    ///
    /// See [`closeness_with_rng`]. On error no scores are kept.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &mut self,
        graph: &CsrGraph,
        rng: &mut R,
    ) -> Result<&[f64]> {
        self.result = None;
        let result = closeness_with_rng(graph, &self.config, rng, &SparseSolver)?;
        Ok(self.result.insert(result).scores.as_slice())
    }

    /// Compute scores and return a copy of them
    ///
    /// # Errors
    ///
    /// See [`closeness_with_rng`].
    pub fn fit_transform(&mut self, graph: &CsrGraph) -> Result<Vec<f64>> {
        self.fit(graph).map(<[f64]>::to_vec)
    }

    /// Scores from the last successful `fit`
    #[must_use]
    pub fn scores(&self) -> Option<&[f64]> {
        self.result.as_ref().map(|r| r.scores.as_slice())
    }

    /// Full result of the last successful `fit`
    #[must_use]
    pub const fn result(&self) -> Option<&ClosenessResult> {
        self.result.as_ref()
    }
}
