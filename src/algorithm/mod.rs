pub mod a_star;
pub mod batch;
pub mod bellman_ford;
pub mod dijkstra;
pub mod traits;

pub use batch::{solve_all_sources, solve_many};
pub use traits::{
    reconstruct_path, DistanceTable, Path, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
