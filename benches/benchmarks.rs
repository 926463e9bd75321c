//! Criterion benchmarks for kingraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use kingraph::graph::{Graph, VertexFilter};

/// Build a random graph with roughly `edges_per_vertex` outgoing edges each.
fn make_large_graph(vertex_count: usize, edges_per_vertex: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let names: Vec<String> = (0..vertex_count).map(|i| format!("v{}", i)).collect();

    let mut graph = Graph::new();
    for name in &names {
        graph.add_vertex(name);
    }
    for from in &names {
        for _ in 0..edges_per_vertex {
            let to = &names[rng.gen_range(0..vertex_count)];
            graph.add_edge(from, to);
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let names: Vec<String> = (0..1_000).map(|i| format!("v{}", i)).collect();

    c.bench_function("add_edge_10k", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for i in 0..10_000 {
                graph.add_edge(&names[i % 1_000], &names[(i * 7 + 1) % 1_000]);
            }
            black_box(graph.edge_count())
        })
    });
}

fn bench_grandparents(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 5);

    c.bench_function("grandparents_100k", |b| {
        b.iter(|| black_box(graph.query_grandparents("v42")))
    });
}

fn bench_siblings(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 5);

    c.bench_function("siblings_100k", |b| {
        b.iter(|| black_box(graph.query_siblings("v42")))
    });
}

fn bench_cousins(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 5);

    c.bench_function("cousins_100k", |b| {
        b.iter(|| black_box(graph.query_cousins("v42")))
    });
}

fn bench_filter(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);
    let filter = VertexFilter::new().prefix("v1").min_out_degree(3);

    c.bench_function("filter_100k", |b| {
        b.iter(|| black_box(graph.filter_by(&filter).len()))
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_grandparents,
    bench_siblings,
    bench_cousins,
    bench_filter
);
criterion_main!(benches);
