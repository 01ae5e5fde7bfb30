use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::weight::Weight;
use crate::{InvalidArgument, Result};

/// A directed graph implementation using adjacency lists
///
/// Vertices are the dense indices `0..vertex_count`; each one owns the ordered
/// list of its outgoing `(target, weight)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)`
    /// triples. Edges keep their input order; parallel edges are kept.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::with_capacity(vertices);
        for &(from, to, weight) in edges {
            if from >= vertices || to >= vertices {
                return Err(InvalidArgument::EdgeOutOfRange {
                    from,
                    to,
                    vertex_count: vertices,
                }
                .into());
            }
            graph.outgoing_edges[from].push((to, weight));
        }
        Ok(graph)
    }

    /// Iterates over every edge as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|(_, _, weight)| !weight.is_negative())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let outgoing = &mut self.outgoing_edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        let Some(outgoing) = self.outgoing_edges.get_mut(from) else {
            return false;
        };

        let mut updated = false;
        for edge in outgoing.iter_mut().filter(|(target, _)| *target == to) {
            edge.1 = weight;
            updated = true;
        }
        updated
    }
}
