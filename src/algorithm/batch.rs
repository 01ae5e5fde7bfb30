use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Runs one single-source solve per entry of `sources` in parallel.
///
/// Each solve only reads the graph, so they share it without locking.
/// Results come back in the order of `sources`; the first failing source
/// fails the whole batch.
pub fn solve_many<W, G, A>(algorithm: &A, graph: &G, sources: &[usize]) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// All-pairs distances by solving from every vertex
pub fn solve_all_sources<W, G, A>(algorithm: &A, graph: &G) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    let sources: Vec<usize> = (0..graph.vertex_count()).collect();
    solve_many(algorithm, graph, &sources)
}
