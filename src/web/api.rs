use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::a_star::AStar;
use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{DirectedGraph, GraphDocument, GridMaze};
use crate::web::models::*;
use crate::{Error, InvalidArgument};

/// Vertex limit for uploaded graphs and mazes unless configured otherwise
pub const DEFAULT_MAX_VERTICES: usize = 1_000_000;

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    /// Oldest sessions are evicted once this many exist
    pub max_sessions: usize,
    /// Largest graph, in vertices, a session may hold
    pub max_vertices: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    fn check_size(&self, vertex_count: usize) -> Result<(), ApiError> {
        if vertex_count > self.max_vertices {
            warn!("rejected graph with {} vertices", vertex_count);
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_argument",
                format!(
                    "Graph has {} vertices, the limit is {}",
                    vertex_count, self.max_vertices
                ),
            ));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_unavailable",
                "Session store is unavailable".to_string(),
            )
        })
    }

    fn insert(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.lock()?;
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    info!("evicted session {}", id);
                }
                None => break,
            }
        }
        sessions.insert(session.id, session);
        Ok(())
    }

    fn get(&self, session_id: Uuid) -> Result<Session, ApiError> {
        self.lock()?
            .get(&session_id)
            .cloned()
            .ok_or_else(|| session_not_found(session_id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/mazes", post(create_maze))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/solve/:session_id", post(solve))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Store an uploaded graph in a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(document): Json<GraphDocument<WebWeight>>,
) -> Result<Json<Session>, ApiError> {
    state.check_size(document.vertex_count)?;
    document.to_graph().map_err(error_response)?;

    let session = Session::new(document);
    info!(
        "created session {} with {} vertices",
        session.id, session.graph.vertex_count
    );
    state.insert(session.clone())?;

    Ok(Json(session))
}

/// Build a graph from a text maze and store it in a new session
pub async fn create_maze(
    State(state): State<AppState>,
    Json(request): Json<MazeRequest>,
) -> Result<Json<Session>, ApiError> {
    let maze = GridMaze::parse(&request.text).map_err(error_response)?;
    state.check_size(maze.rows() * maze.cols())?;
    if request.step <= 0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_argument",
            format!("Maze step must be positive, got {}", request.step),
        ));
    }

    let graph = maze.to_graph(request.step);
    let session = Session::new(GraphDocument::from_graph(&graph)).with_maze(maze);
    info!(
        "created maze session {} ({}x{})",
        session.id,
        session.maze.as_ref().map_or(0, GridMaze::rows),
        session.maze.as_ref().map_or(0, GridMaze::cols)
    );
    state.insert(session.clone())?;

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphDocument<WebWeight>>, ApiError> {
    Ok(Json(state.get(session_id)?.graph))
}

/// Run an algorithm on a session's graph
pub async fn solve(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let session = state.get(session_id)?;
    let response = run_solver(&session, &request)?;

    if let Some(stored) = state.lock()?.get_mut(&session_id) {
        stored.last_result = Some(response.clone());
    }

    Ok(Json(response))
}

pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let mut summaries: Vec<SessionSummary> = state.lock()?.values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    Ok(Json(state.get(session_id)?))
}

pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": "dijkstra_sssp",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    })))
}

/// Executes `request` against the session's graph
pub fn run_solver(session: &Session, request: &SolveRequest) -> Result<SolveResponse, ApiError> {
    let graph = session.graph.to_graph().map_err(error_response)?;

    let start_time = Instant::now();
    let (result, path) = match request.algorithm.as_str() {
        "dijkstra" => full_solve(&Dijkstra::new(), &graph, request)?,
        "bellman-ford" => full_solve(&BellmanFord::new(), &graph, request)?,
        "a-star" => {
            let target = request.target.ok_or_else(|| {
                api_error(
                    StatusCode::BAD_REQUEST,
                    "missing_target",
                    "a-star needs a target vertex".to_string(),
                )
            })?;
            let path = match &session.maze {
                Some(maze) => {
                    let step = session.graph.edges.first().map_or(1, |&(_, _, w)| w);
                    let goal = maze.coord_from_id(target);
                    let manhattan = maze.manhattan(goal);
                    // Saturating keeps the estimate admissible: a route whose
                    // length does not fit fails in the solver instead
                    let heuristic = |v: usize| {
                        WebWeight::try_from(manhattan(v))
                            .unwrap_or(WebWeight::MAX)
                            .saturating_mul(step)
                    };
                    AStar::new(heuristic).find_path(
                        &graph,
                        request.source,
                        target,
                    )
                }
                None => AStar::new(|_: usize| 0).find_path(&graph, request.source, target),
            }
            .map_err(error_response)?;
            (None, path)
        }
        other => {
            warn!("rejected unknown algorithm {:?}", other);
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_algorithm",
                format!("Unknown algorithm: {}", other),
            ));
        }
    };
    let execution_time = start_time.elapsed();

    let (distances, predecessors, stats) = match result {
        Some(result) => (
            result.distances.as_slice().to_vec(),
            result.predecessors,
            result.stats,
        ),
        None => (Vec::new(), Vec::new(), SearchStats::default()),
    };

    Ok(SolveResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm.clone(),
        source: request.source,
        target: request.target,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances,
        predecessors,
        path,
        stats,
    })
}

type FullSolve = (
    Option<ShortestPathResult<WebWeight>>,
    Option<crate::algorithm::Path<WebWeight>>,
);

fn full_solve<A>(
    algorithm: &A,
    graph: &DirectedGraph<WebWeight>,
    request: &SolveRequest,
) -> Result<FullSolve, ApiError>
where
    A: ShortestPathAlgorithm<WebWeight, DirectedGraph<WebWeight>>,
{
    let result = algorithm
        .compute_shortest_paths(graph, request.source)
        .map_err(error_response)?;

    let path = match request.target {
        Some(target) if target >= result.distances.len() => {
            return Err(error_response(
                InvalidArgument::TargetOutOfRange {
                    vertex: target,
                    vertex_count: result.distances.len(),
                }
                .into(),
            ))
        }
        Some(target) => result.path_to(target),
        None => None,
    };

    Ok((Some(result), path))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found(session_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

/// Maps a library error onto a status code: caller mistakes are 400, graphs
/// without shortest paths 422, the rest 500
fn error_response(err: Error) -> ApiError {
    if err.is_invalid_argument() {
        warn!("rejected request: {}", err);
        api_error(StatusCode::BAD_REQUEST, "invalid_argument", err.to_string())
    } else if matches!(err, Error::NegativeCycle) {
        api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "negative_cycle",
            err.to_string(),
        )
    } else {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "solver_failed",
            err.to_string(),
        )
    }
}
