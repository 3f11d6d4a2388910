//! Graph storage layer
//!
//! Provides the CSR (Compressed Sparse Row) adjacency representation shared by
//! every algorithm in the crate.

pub mod csr;

pub use csr::{CsrGraph, NodeId};
