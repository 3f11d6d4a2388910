//! Criterion benchmarks for graph algorithms
//!
//! Tracks:
//! - CSR construction from triplets
//! - BFS/DFS traversal
//! - Multi-source shortest paths, sequential vs rayon
//! - Exact vs approximate closeness

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use trueno_centrality::{
    bfs, closeness, dfs, shortest_paths, ClosenessConfig, CsrGraph, NodeId, PathConfig,
};

/// Generate scale-free-ish edge pairs (Barabási-Albert model approximation)
///
/// A ring is laid down first so every generated graph is connected.
fn generate_scale_free_graph(num_nodes: usize, edges_per_node: usize) -> Vec<(u32, u32)> {
    let mut pairs: Vec<_> = (0..num_nodes as u32)
        .map(|i| (i, (i + 1) % num_nodes as u32))
        .collect();
    let mut rng_state = 12345_u64; // Simple LCG for reproducibility

    for node in 0..num_nodes {
        for _ in 0..edges_per_node {
            rng_state = rng_state.wrapping_mul(1103515245).wrapping_add(12345);
            let target = (rng_state % num_nodes as u64) as u32;

            if target != node as u32 {
                pairs.push((node as u32, target));
            }
        }
    }

    pairs
}

fn undirected_graph(size: usize) -> CsrGraph {
    let pairs = generate_scale_free_graph(size, 3);
    CsrGraph::from_pairs(size, &pairs).unwrap().undirected()
}

/// Benchmark: CSR graph construction from edge pairs
fn bench_csr_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_construction");

    for size in [100, 500, 1000, 5000].iter() {
        let pairs = generate_scale_free_graph(*size, 3);

        group.bench_with_input(BenchmarkId::new("from_pairs", size), &pairs, |b, pairs| {
            b.iter(|| {
                let graph = CsrGraph::from_pairs(*size, black_box(pairs)).unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

/// Benchmark: BFS and DFS traversal orders
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [100, 1000, 10_000].iter() {
        let graph = undirected_graph(*size);

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, graph| {
            b.iter(|| black_box(bfs(black_box(graph), NodeId(0)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, graph| {
            b.iter(|| black_box(dfs(black_box(graph), NodeId(0)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: all-sources shortest paths, sequential vs all rayon threads
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.sample_size(20);

    for size in [100, 500, 1000].iter() {
        let graph = undirected_graph(*size);
        let sources: Vec<_> = (0..*size as u32).map(NodeId).collect();

        for (label, workers) in [("sequential", None), ("parallel", Some(-1))] {
            let config = PathConfig::default().directed(false).workers(workers);
            group.bench_with_input(BenchmarkId::new(label, size), &graph, |b, graph| {
                b.iter(|| black_box(shortest_paths(graph, &sources, &config).unwrap()));
            });
        }
    }

    group.finish();
}

/// Benchmark: exact vs sampled closeness
fn bench_closeness(c: &mut Criterion) {
    let mut group = c.benchmark_group("closeness");
    group.sample_size(10);

    for size in [500, 2000].iter() {
        let graph = undirected_graph(*size);

        let configs = [
            ("exact", ClosenessConfig::exact()),
            ("approx_0.1", ClosenessConfig::approximate(0.1)),
            ("approx_0.3", ClosenessConfig::approximate(0.3)),
        ];
        for (label, config) in configs {
            group.bench_with_input(BenchmarkId::new(label, size), &graph, |b, graph| {
                b.iter(|| black_box(closeness(black_box(graph), &config).unwrap()));
            });
        }
    }

    group.finish();
}

/// Benchmark: Neighbor queries (outgoing vs incoming)
fn bench_neighbor_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_queries");

    let pairs = generate_scale_free_graph(1000, 5);
    let graph = CsrGraph::from_pairs(1000, &pairs).unwrap();

    group.bench_function("outgoing_neighbors", |b| {
        b.iter(|| {
            for node in 0..100 {
                black_box(graph.outgoing_neighbors(NodeId(node)).unwrap());
            }
        });
    });

    group.bench_function("incoming_neighbors", |b| {
        b.iter(|| {
            for node in 0..100 {
                black_box(graph.incoming_neighbors(NodeId(node)).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_csr_construction,
    bench_traversal,
    bench_shortest_paths,
    bench_closeness,
    bench_neighbor_queries
);
criterion_main!(benches);
