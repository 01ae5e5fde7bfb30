use log::debug;

use crate::algorithm::traits::{check_source, check_target};
use crate::algorithm::{DistanceTable, Path};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Goal-directed point-to-point search
///
/// Orders the frontier by `distance + heuristic(vertex)`. With an admissible
/// and consistent heuristic (never overestimating, and never dropping by more
/// than an edge's weight along that edge) the returned distance equals
/// Dijkstra's; a zero heuristic degenerates into Dijkstra with early exit.
#[derive(Debug, Clone)]
pub struct AStar<F> {
    heuristic: F,
}

impl<F> AStar<F> {
    pub fn new(heuristic: F) -> Self {
        AStar { heuristic }
    }

    /// Finds a route from `source` to `target`, or `Ok(None)` if none exists
    pub fn find_path<W, G>(&self, graph: &G, source: usize, target: usize) -> Result<Option<Path<W>>>
    where
        W: Weight,
        G: Graph<W>,
        F: Fn(usize) -> W,
    {
        check_source(graph, source)?;
        check_target(graph, target)?;
        graph.validate(false)?;

        let n = graph.vertex_count();
        let mut g_score = DistanceTable::<W>::new(n, source);
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut expanded = 0usize;
        let mut overflowed: Vec<usize> = Vec::new();

        let mut frontier = Frontier::new();
        frontier.push(source, self.f_score(W::zero(), source));

        while let Some((u, _)) = frontier.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;
            expanded += 1;

            if u == target {
                break;
            }

            let Some(g_u) = g_score.get(u) else {
                continue;
            };
            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let Some(tentative) = g_u.checked_add(weight) else {
                    overflowed.push(v);
                    continue;
                };
                if g_score.relax(v, tentative) {
                    predecessors[v] = Some(u);
                    frontier.push(v, self.f_score(tentative, v));
                }
            }
        }

        debug!("a* from {} to {}: expanded {} of {} vertices", source, target, expanded, n);

        let Some(distance) = g_score.get(target) else {
            // Every reachable vertex was expanded; one left without a
            // distance only had routes past the representable range
            if let Some(&vertex) = overflowed.iter().find(|&&v| !g_score.is_reachable(v)) {
                return Err(Error::DistanceOverflow { vertex });
            }
            return Ok(None);
        };

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            match predecessors[current] {
                Some(pred) => current = pred,
                None => return Ok(None),
            }
            vertices.push(current);
        }
        vertices.reverse();

        Ok(Some(Path { vertices, distance }))
    }

    /// Frontier priority of `vertex`; saturates at the sentinel, which only
    /// orders the entry behind every route to the target
    fn f_score<W>(&self, g: W, vertex: usize) -> W
    where
        W: Weight,
        F: Fn(usize) -> W,
    {
        g.checked_add((self.heuristic)(vertex))
            .unwrap_or_else(W::infinity)
    }
}
