//! Dijkstra SSSP - Single-Source Shortest Paths over adjacency-list graphs
//!
//! This library implements the classic label-setting algorithm of Dijkstra for
//! directed graphs with non-negative edge weights, driven by a binary-heap
//! frontier. Bellman-Ford and A* are provided alongside it for graphs with
//! negative weights and for goal-directed point-to-point queries.
//!
//! ```
//! use dijkstra_sssp::{DirectedGraph, Dijkstra, ShortestPathAlgorithm};
//!
//! let graph = DirectedGraph::from_edges(
//!     5,
//!     &[(0, 1, 2u64), (0, 4, 1), (1, 2, 3), (4, 2, 2), (2, 3, 6)],
//! ).unwrap();
//! let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
//! assert_eq!(result.distances.to_sentinel_vec(), vec![0, 2, 3, 9, 1]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    a_star::AStar, bellman_ford::BellmanFord, dijkstra::Dijkstra, DistanceTable, Path,
    SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::weight::Weight;

/// Reasons an argument handed to a solver was rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("source vertex {vertex} is outside [0, {vertex_count})")]
    SourceOutOfRange { vertex: usize, vertex_count: usize },

    #[error("target vertex {vertex} is outside [0, {vertex_count})")]
    TargetOutOfRange { vertex: usize, vertex_count: usize },

    #[error("edge {from} -> {to} references a vertex outside [0, {vertex_count})")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("path length to vertex {vertex} overflows the weight type")]
    DistanceOverflow { vertex: usize },

    #[error("negative cycle reachable from the source")]
    NegativeCycle,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by the caller's input rather than the computation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::Parse(_) | Error::Json(_))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
