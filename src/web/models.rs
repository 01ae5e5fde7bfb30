use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{Path, SearchStats};
use crate::graph::{GraphDocument, GridMaze};

/// Weight type used on the wire. Signed so that negative weights reach the
/// solvers and are rejected there with a proper message.
pub type WebWeight = i64;

/// Request body for building a graph from a text maze
#[derive(Debug, Deserialize)]
pub struct MazeRequest {
    pub text: String,
    #[serde(default = "default_step")]
    pub step: WebWeight,
}

fn default_step() -> WebWeight {
    1
}

/// Parameters for algorithm execution
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    pub source: usize,
    #[serde(default)]
    pub target: Option<usize>,
}

fn default_algorithm() -> String {
    "dijkstra".to_string()
}

/// Response containing algorithm execution results
#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    pub execution_time_ms: f64,
    /// `null` for vertices the source cannot reach
    pub distances: Vec<Option<WebWeight>>,
    pub predecessors: Vec<Option<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path<WebWeight>>,
    pub stats: SearchStats,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing graph data and execution history
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: GraphDocument<WebWeight>,
    #[serde(skip_serializing)]
    pub maze: Option<GridMaze>,
    pub last_result: Option<SolveResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: GraphDocument<WebWeight>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            maze: None,
            last_result: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_maze(mut self, maze: GridMaze) -> Self {
        self.maze = Some(maze);
        self
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count,
            edge_count: self.graph.edges.len(),
            is_maze: self.maze.is_some(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry for `GET /api/sessions`
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub is_maze: bool,
    pub created_at: DateTime<Utc>,
}
