use log::debug;

use crate::algorithm::traits::check_source;
use crate::algorithm::{DistanceTable, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford shortest paths
///
/// Slower than Dijkstra (`O(V * E)`) but accepts negative edge weights.
/// Fails with [`Error::NegativeCycle`] when a cycle of negative total weight
/// is reachable from the source, since no shortest distance exists then.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_source(graph, source)?;
        graph.validate(true)?;

        let n = graph.vertex_count();
        let mut distances = DistanceTable::<W>::new(n, source);
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();
        let mut overflowed: Vec<usize> = Vec::new();

        // One extra round past V - 1 detects a reachable negative cycle
        for round in 0..n {
            let mut changed = false;

            for u in 0..n {
                let Some(dist_u) = distances.get(u) else {
                    continue;
                };
                for (v, weight) in graph.outgoing_edges(u) {
                    let Some(new_dist) = dist_u.checked_add(weight) else {
                        // Too far below the range is a real overflow; too far
                        // above it can never improve a distance
                        if weight.is_negative() {
                            return Err(Error::DistanceOverflow { vertex: v });
                        }
                        overflowed.push(v);
                        continue;
                    };
                    if distances.relax(v, new_dist) {
                        predecessors[v] = Some(u);
                        stats.relaxations += 1;
                        changed = true;
                    }
                }
            }

            if !changed {
                if let Some(&vertex) = overflowed.iter().find(|&&v| !distances.is_reachable(v)) {
                    return Err(Error::DistanceOverflow { vertex });
                }
                debug!(
                    "bellman-ford from {} converged after {} rounds, {} relaxations",
                    source,
                    round + 1,
                    stats.relaxations
                );
                return Ok(ShortestPathResult {
                    distances,
                    predecessors,
                    source,
                    stats,
                });
            }
        }

        Err(Error::NegativeCycle)
    }
}
