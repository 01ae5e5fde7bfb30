use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and about
/// `edge_factor * n` edges whose weights are drawn from `1..=max_weight`.
///
/// The same seed always yields the same graph. Self-loops are skipped and a
/// repeated `(u, v)` pair keeps the last drawn weight.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity in both
/// directions, every edge carrying `weight`
pub fn generate_grid(width: usize, height: usize, weight: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x > 0 {
                graph.add_edge(current, get_index(x - 1, y), weight);
            }
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), weight);
            }
            if y > 0 {
                graph.add_edge(current, get_index(x, y - 1), weight);
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), weight);
            }
        }
    }

    graph
}
