//! Benchmarks for the algorithm suite on synthetic graphs.
//!
//! Run with: cargo bench -p graphika-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphika_common::types::VertexId;
use graphika_core::algorithms::{
    dfs_components, dijkstra, dominating_set_greedy, greedy_coloring, hybrid_solver, kruskal,
    nearest_neighbor, prim, welsh_powell_coloring,
};
use graphika_core::UndirectedGraph;
use rand::prelude::*;

fn v(id: u64) -> VertexId {
    VertexId::new(id)
}

/// Complete graph on `n` vertices with deterministic weights.
fn generate_complete(n: u64) -> UndirectedGraph<f64> {
    let mut g = UndirectedGraph::new();
    for i in 0..n {
        g.add_vertex(v(i));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(v(i), v(j), (1 + (i + j) % 10) as f64);
        }
    }
    g
}

/// Random graph: each vertex pair gets an edge with probability `density`.
fn generate_random(n: u64, density: f64, seed: u64) -> UndirectedGraph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = UndirectedGraph::new();
    for i in 0..n {
        g.add_vertex(v(i));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < density {
                let weight = 1.0 + f64::from(rng.gen_range(0..100u32)) / 10.0;
                g.add_edge(v(i), v(j), weight);
            }
        }
    }
    g
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [50, 200, 500, 1000] {
        let g = generate_random(size, 0.1, 42);

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(dijkstra(&g, v(0))));
        });
    }

    group.finish();
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    for size in [50, 200, 500] {
        let g = generate_complete(size);

        group.bench_with_input(BenchmarkId::new("kruskal", size), &size, |b, _| {
            b.iter(|| black_box(kruskal(&g)));
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &size, |b, _| {
            b.iter(|| black_box(prim(&g, v(0))));
        });
    }

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    for size in [200, 1000, 5000] {
        let g = generate_random(size, 0.01, 42);

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(dfs_components(&g)));
        });
    }

    group.finish();
}

fn bench_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("coloring");

    for size in [50, 200, 500] {
        let g = generate_random(size, 0.2, 42);

        group.bench_with_input(BenchmarkId::new("greedy", size), &size, |b, _| {
            b.iter(|| black_box(greedy_coloring(&g)));
        });
        group.bench_with_input(BenchmarkId::new("welsh_powell", size), &size, |b, _| {
            b.iter(|| black_box(welsh_powell_coloring(&g)));
        });
    }

    group.finish();
}

fn bench_tsp_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");

    for size in [20, 50, 100] {
        let g = generate_complete(size);

        group.bench_with_input(BenchmarkId::new("nearest_neighbor", size), &size, |b, _| {
            b.iter(|| black_box(nearest_neighbor(&g, v(0))));
        });
        group.bench_with_input(BenchmarkId::new("hybrid", size), &size, |b, _| {
            b.iter(|| black_box(hybrid_solver(&g, v(0))));
        });
    }

    group.finish();
}

fn bench_facility(c: &mut Criterion) {
    let mut group = c.benchmark_group("facility");

    for size in [20, 50, 100] {
        let g = generate_random(size, 0.2, 42);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(dominating_set_greedy(&g)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dijkstra,
    bench_mst,
    bench_components,
    bench_coloring,
    bench_tsp_heuristics,
    bench_facility,
);

criterion_main!(benches);
