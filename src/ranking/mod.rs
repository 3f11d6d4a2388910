//! Node ranking algorithms
//!
//! Closeness centrality, exact or sampled (Eppstein–Wang).

pub mod closeness;

pub use closeness::{
    closeness, closeness_with_rng, sample_size, Closeness, ClosenessConfig, ClosenessResult,
    Method, DEFAULT_SEED, DEFAULT_TOLERANCE,
};
