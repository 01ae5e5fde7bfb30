pub mod directed;
pub mod document;
pub mod generators;
pub mod grid;
pub mod traits;
pub mod weight;

pub use directed::DirectedGraph;
pub use document::{load_graph, GraphDocument};
pub use grid::GridMaze;
pub use traits::{Graph, MutableGraph};
pub use weight::Weight;
