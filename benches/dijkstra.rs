use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_sssp::algorithm::{solve_many, ShortestPathAlgorithm};
use dijkstra_sssp::graph::generators::{generate_grid, generate_random_graph};
use dijkstra_sssp::{BellmanFord, Dijkstra};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = generate_random_graph(size, 2.0, 100, 42);

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            let dijkstra = Dijkstra::new();
            b.iter(|| dijkstra.compute_shortest_paths(black_box(graph), 0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dijkstra_no_stale_skip", size), &graph, |b, graph| {
            let dijkstra = Dijkstra::new().with_stale_skipping(false);
            b.iter(|| dijkstra.compute_shortest_paths(black_box(graph), 0).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(200, 200, 1);
    let target = 200 * 200 - 1;
    let dijkstra = Dijkstra::new();

    c.bench_function("grid_200_full", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&graph), 0).unwrap())
    });
    c.bench_function("grid_200_point_to_point", |b| {
        b.iter(|| dijkstra.shortest_path(black_box(&graph), 0, target).unwrap())
    });
}

fn bench_bellman_ford(c: &mut Criterion) {
    let graph = generate_random_graph(2_000, 2.0, 100, 7);
    c.bench_function("bellman_ford_2000", |b| {
        b.iter(|| BellmanFord::new().compute_shortest_paths(black_box(&graph), 0).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    let graph = generate_random_graph(10_000, 3.0, 100, 11);
    let sources: Vec<usize> = (0..32).collect();
    let dijkstra = Dijkstra::new();
    c.bench_function("solve_many_32_sources", |b| {
        b.iter(|| solve_many(&dijkstra, black_box(&graph), &sources).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid, bench_bellman_ford, bench_batch);
criterion_main!(benches);
