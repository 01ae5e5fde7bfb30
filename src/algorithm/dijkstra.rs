use log::{debug, trace};

use crate::algorithm::traits::{check_source, check_target, reconstruct_path};
use crate::algorithm::{DistanceTable, Path, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Label-setting search over a binary-heap frontier. Improved vertices are
/// pushed again instead of being decreased in place, so the frontier can hold
/// superseded entries for a vertex; those are recognised on extraction by
/// comparing against the distance table.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Discard popped entries whose distance is worse than the table's
    skip_stale: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { skip_stale: true }
    }

    /// Enable or disable discarding of superseded frontier entries.
    ///
    /// Distances are identical either way; with skipping disabled a stale
    /// entry has its edges scanned again, which can never improve anything.
    pub fn with_stale_skipping(mut self, enabled: bool) -> Self {
        self.skip_stale = enabled;
        self
    }

    /// Returns whether superseded frontier entries are discarded on extraction
    pub fn skips_stale(&self) -> bool {
        self.skip_stale
    }

    /// Shortest route from `source` to `target`.
    ///
    /// The search stops as soon as `target` is settled. Returns `Ok(None)`
    /// when the target cannot be reached.
    pub fn shortest_path<W, G>(&self, graph: &G, source: usize, target: usize) -> Result<Option<Path<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        check_source(graph, source)?;
        check_target(graph, target)?;
        graph.validate(false)?;

        let result = self.run(graph, source, Some(target))?;
        Ok(result.distances.get(target).and_then(|distance| {
            reconstruct_path(&result, target).map(|vertices| Path { vertices, distance })
        }))
    }

    fn run<W, G>(&self, graph: &G, source: usize, target: Option<usize>) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        let mut distances = DistanceTable::new(n, source);
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();

        // Vertices offered a candidate distance past the representable range
        let mut overflowed: Vec<usize> = Vec::new();

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            stats.extractions += 1;

            let is_stale = distances.get(u).map_or(false, |best| best < dist_u);
            if is_stale && self.skip_stale {
                stats.stale_skips += 1;
                continue;
            }

            if !is_stale && target == Some(u) {
                break;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                // A sum that does not fit exceeds every representable distance
                let Some(new_dist) = dist_u.checked_add(weight) else {
                    overflowed.push(v);
                    continue;
                };

                if distances.relax(v, new_dist) {
                    trace!("relaxed {} -> {} to {}", u, v, new_dist);
                    predecessors[v] = Some(u);
                    frontier.push(v, new_dist);
                    stats.relaxations += 1;
                }
            }
        }

        // An early exit leaves the rest of the table unfinished
        let exhausted = target.map_or(true, |t| !distances.is_reachable(t));
        if exhausted {
            if let Some(vertex) = overflowed.into_iter().find(|&v| !distances.is_reachable(v)) {
                return Err(Error::DistanceOverflow { vertex });
            }
        }

        stats.frontier_peak = frontier.peak_len();
        debug!(
            "dijkstra from {}: {} of {} vertices reached, {} extractions, {} stale",
            source,
            distances.reachable_count(),
            n,
            stats.extractions,
            stats.stale_skips
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_source(graph, source)?;
        graph.validate(false)?;
        self.run(graph, source, None)
    }
}
