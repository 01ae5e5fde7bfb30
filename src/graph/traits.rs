use std::fmt::Debug;

use crate::graph::weight::Weight;
use crate::{InvalidArgument, Result};

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Checks that every edge stays inside `[0, V)` and, when
    /// `allow_negative` is false, that no weight is below zero
    fn validate(&self, allow_negative: bool) -> Result<()> {
        let vertex_count = self.vertex_count();
        for from in 0..vertex_count {
            for (to, weight) in self.outgoing_edges(from) {
                if to >= vertex_count {
                    return Err(InvalidArgument::EdgeOutOfRange {
                        from,
                        to,
                        vertex_count,
                    }
                    .into());
                }
                if !allow_negative && weight.is_negative() {
                    return Err(InvalidArgument::NegativeWeight {
                        from,
                        to,
                        weight: weight.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge, or overwrites the weight of an existing one.
    /// Returns false if either endpoint is not a vertex of the graph
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool;
}
