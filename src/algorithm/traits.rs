use serde::Serialize;
use std::ops::Index;

use crate::graph::{Graph, Weight};
use crate::{InvalidArgument, Result};

/// Best known distance from the source to every vertex
///
/// `None` marks a vertex with no path from the source. Once a solver returns,
/// the table is final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable<W> {
    distances: Vec<Option<W>>,
}

impl<W> DistanceTable<W>
where
    W: Weight,
{
    /// A table of `vertex_count` entries where only `source` is at zero
    pub fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        if let Some(entry) = distances.get_mut(source) {
            *entry = Some(W::zero());
        }
        DistanceTable { distances }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of vertices with a known distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<W>> + '_ {
        self.distances.iter().copied()
    }

    /// Flat numeric view with `W::infinity()` for unreachable vertices
    pub fn to_sentinel_vec(&self) -> Vec<W> {
        self.distances
            .iter()
            .map(|d| d.unwrap_or_else(W::infinity))
            .collect()
    }

    pub fn as_slice(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Lowers the distance of `vertex` if `candidate` is strictly smaller.
    /// Returns whether the table changed.
    pub(crate) fn relax(&mut self, vertex: usize, candidate: W) -> bool {
        match self.distances[vertex] {
            Some(current) if current <= candidate => false,
            _ => {
                self.distances[vertex] = Some(candidate);
                true
            }
        }
    }
}

impl<W> Index<usize> for DistanceTable<W> {
    type Output = Option<W>;

    fn index(&self, vertex: usize) -> &Self::Output {
        &self.distances[vertex]
    }
}

impl<W> From<DistanceTable<W>> for Vec<Option<W>> {
    fn from(table: DistanceTable<W>) -> Self {
        table.distances
    }
}

/// Counters gathered while a solver runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries popped from the frontier
    pub extractions: usize,
    /// Popped entries discarded because a shorter distance was already known
    pub stale_skips: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Largest number of entries held by the frontier at once
    pub frontier_peak: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex
    pub distances: DistanceTable<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Route to `target` through the shortest path tree, if it is reachable
    pub fn path_to(&self, target: usize) -> Option<Path<W>> {
        let distance = self.distances.get(target)?;
        reconstruct_path(self, target).map(|vertices| Path { vertices, distance })
    }
}

/// A single source-to-target route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<W> {
    /// Vertices from source to target, both inclusive
    pub vertices: Vec<usize>,
    /// Total weight along `vertices`
    pub distance: W,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        reconstruct_path(result, target)
    }
}

/// Walks the predecessor chain back from `target` to the source.
///
/// Returns `None` if the target is unreachable or the chain is broken.
pub fn reconstruct_path<W: Weight>(result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
    if target >= result.predecessors.len() || !result.distances.is_reachable(target) {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while current != result.source {
        current = result.predecessors[current]?;
        path.push(current);
        // A chain longer than the vertex count means the predecessors loop
        if path.len() > result.predecessors.len() {
            return None;
        }
    }

    path.reverse();
    Some(path)
}

pub(crate) fn check_source<W: Weight, G: Graph<W>>(graph: &G, source: usize) -> Result<()> {
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(InvalidArgument::SourceOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count(),
        }
        .into())
    }
}

pub(crate) fn check_target<W: Weight, G: Graph<W>>(graph: &G, target: usize) -> Result<()> {
    if graph.has_vertex(target) {
        Ok(())
    } else {
        Err(InvalidArgument::TargetOutOfRange {
            vertex: target,
            vertex_count: graph.vertex_count(),
        }
        .into())
    }
}
