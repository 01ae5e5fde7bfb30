use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::graph::weight::Weight;
use crate::Result;

/// Serializable description of a graph: a vertex count plus an edge list
///
/// ```json
/// { "vertex_count": 3, "edges": [[0, 1, 4], [1, 2, 1]] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument<W> {
    pub vertex_count: usize,
    #[serde(default = "Vec::new")]
    pub edges: Vec<(usize, usize, W)>,
}

impl<W> GraphDocument<W>
where
    W: Weight,
{
    /// Builds the graph, rejecting edges with an endpoint outside `[0, V)`
    pub fn to_graph(&self) -> Result<DirectedGraph<W>> {
        DirectedGraph::from_edges(self.vertex_count, &self.edges)
    }

    /// Captures an existing graph
    pub fn from_graph(graph: &DirectedGraph<W>) -> Self {
        GraphDocument {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }
}

impl<W> GraphDocument<W>
where
    W: Weight + for<'de> Deserialize<'de>,
{
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON graph document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Loads a JSON graph document and builds the graph in one step
pub fn load_graph<W>(path: impl AsRef<Path>) -> Result<DirectedGraph<W>>
where
    W: Weight + for<'de> Deserialize<'de>,
{
    GraphDocument::load(path)?.to_graph()
}
