use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::batch::distance_matrix;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::heap_dijkstra::HeapDijkstra;
use crate::algorithm::longest_path::LongestPath;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{fold_vertex_costs, orient, orient_ascending, DirectedGraph, Graph, WeightMatrix};
use crate::web::models::*;
use crate::Error;

/// Shortest path engine chosen by name in a request
#[derive(Debug, Clone, Copy)]
enum Engine {
    Scan,
    Heap,
}

impl Engine {
    fn parse(name: &str) -> Result<Self, ApiError> {
        match name {
            Dijkstra::NAME => Ok(Engine::Scan),
            HeapDijkstra::NAME => Ok(Engine::Heap),
            other => Err(unknown_algorithm(other)),
        }
    }
}

/// A stored matrix with its optional vertex costs
struct Problem {
    matrix: WeightMatrix<f64>,
    vertex_costs: Option<Vec<f64>>,
}

impl Problem {
    /// The matrix the shortest path engines run on
    fn folded(&self) -> crate::Result<WeightMatrix<f64>> {
        match &self.vertex_costs {
            Some(costs) => self.matrix.with_vertex_costs(costs),
            None => Ok(self.matrix.clone()),
        }
    }

    fn oriented(&self, orientation: Orientation) -> crate::Result<DirectedGraph<f64>> {
        let graph = match orientation {
            Orientation::Bidirectional => orient(&self.matrix)?,
            Orientation::Ascending => orient_ascending(&self.matrix)?,
        };
        match &self.vertex_costs {
            Some(costs) => fold_vertex_costs(&graph, costs),
            None => Ok(graph),
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }

    fn session_problem(&self, session_id: Uuid) -> Result<Problem, ApiError> {
        let (rows, vertex_costs) = {
            let sessions = self.lock_sessions()?;
            match sessions.get(&session_id) {
                Some(session) => (session.matrix.clone(), session.vertex_costs.clone()),
                None => return Err(session_not_found()),
            }
        };
        Ok(Problem {
            matrix: WeightMatrix::new(rows).map_err(domain_error)?,
            vertex_costs,
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/matrices", post(create_matrix))
        .route("/api/matrices/:session_id", get(get_matrix))
        .route("/api/shortest-paths/:session_id", post(run_shortest_paths))
        .route("/api/longest-path/:session_id", post(run_longest_path))
        .route("/api/all-sources/:session_id", post(run_all_sources))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Validate a matrix and store it as a new session
pub async fn create_matrix(
    State(state): State<AppState>,
    Json(request): Json<MatrixRequest>,
) -> Result<Json<Session>, ApiError> {
    let matrix = WeightMatrix::new(request.matrix).map_err(domain_error)?;
    matrix.check_non_negative().map_err(domain_error)?;
    if let Some(costs) = &request.vertex_costs {
        matrix.with_vertex_costs(costs).map_err(domain_error)?;
    }

    let session = Session::new(matrix.to_rows(), request.vertex_costs, request.label);

    {
        let mut sessions = state.lock_sessions()?;
        if sessions.len() >= state.max_sessions {
            warn!("session limit of {} reached", state.max_sessions);
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be stored", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session.clone());
    }

    info!("stored {}x{} matrix as session {}", matrix.n(), matrix.n(), session.id);
    Ok(Json(session))
}

/// Get a stored session
pub async fn get_matrix(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.lock_sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Run a shortest path engine from one source
pub async fn run_shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let engine = Engine::parse(&request.algorithm)?;
    let problem = state.session_problem(session_id)?;
    let source = request.source;

    let start_time = Instant::now();
    let result = run_blocking(move || {
        let matrix = problem.folded()?;
        match engine {
            Engine::Scan => Dijkstra::new().compute_shortest_paths(&matrix, source),
            Engine::Heap => HeapDijkstra::new()
                .compute_shortest_paths(&matrix.map_weights(OrderedFloat), source)
                .map(into_plain),
        }
    })
    .await?;
    let execution_time = start_time.elapsed();

    let routes = (0..result.distances.len())
        .filter(|&target| target != result.source)
        .map(|target| RouteEntry {
            target,
            distance: result.distance(target),
            path: result.path_to(target),
        })
        .collect();

    let response = ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm.clone(),
        source: result.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances: (0..result.distances.len()).map(|v| result.distance(v)).collect(),
        parents: result.parents.clone(),
        routes,
    };

    // Update session with result
    {
        let mut sessions = state.lock_sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Orient the stored matrix and find its longest path
pub async fn run_longest_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<LongestPathRequest>,
) -> Result<Json<LongestPathResponse>, ApiError> {
    let problem = state.session_problem(session_id)?;
    let orientation = request.orientation;

    let start_time = Instant::now();
    let (graph, path) = run_blocking(move || {
        let graph = problem.oriented(orientation)?;
        let path = LongestPath::new().compute(&graph)?;
        Ok((graph, path))
    })
    .await?;
    let execution_time = start_time.elapsed();

    Ok(Json(LongestPathResponse {
        execution_id: Uuid::new_v4(),
        orientation: request.orientation,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        graph: render_graph(&graph, Some(&path)),
        path: path.vertices,
        weight: path.weight,
    }))
}

/// Run a shortest path engine from every source in parallel
pub async fn run_all_sources(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AllSourcesRequest>,
) -> Result<Json<AllSourcesResponse>, ApiError> {
    let engine = Engine::parse(&request.algorithm)?;
    let problem = state.session_problem(session_id)?;

    // The rayon batch blocks until every source is done
    let start_time = Instant::now();
    let distances = run_blocking(move || {
        let matrix = problem.folded()?;
        match engine {
            Engine::Scan => distance_matrix(&Dijkstra::new(), &matrix),
            Engine::Heap => distance_matrix(&HeapDijkstra::new(), &matrix.map_weights(OrderedFloat))
                .map(|rows| {
                    rows.into_iter()
                        .map(|row| row.into_iter().map(|d| d.into_inner()).collect())
                        .collect()
                }),
        }
    })
    .await?;
    let execution_time = start_time.elapsed();

    Ok(Json(AllSourcesResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances: distances
            .into_iter()
            .map(|row| row.into_iter().map(|d| Some(d).filter(|d| d.is_finite())).collect())
            .collect(),
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.lock_sessions()?;
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Converts a directed graph into the renderer's format, marking the
/// vertices and consecutive edges of `highlight`
pub fn render_graph(
    graph: &DirectedGraph<f64>,
    highlight: Option<&crate::algorithm::Path<f64>>,
) -> WebGraph {
    let on_path = |v: usize| highlight.map_or(false, |p| p.vertices.contains(&v));
    let edge_on_path = |u: usize, v: usize| highlight.map_or(false, |p| p.contains_edge(u, v));

    let nodes = graph
        .vertices()
        .map(|id| WebNode {
            id,
            label: format!("Vertex {}", id),
            is_path: on_path(id),
        })
        .collect();

    let links = graph
        .edges()
        .map(|(source, target, weight)| WebEdge {
            source,
            target,
            weight,
            is_path: edge_on_path(source, target),
        })
        .collect();

    WebGraph { nodes, links }
}

// Helper functions

/// Runs a CPU-bound engine call off the async worker threads
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "engine_task_failed",
                format!("Engine task failed: {}", err),
            )
        })?
        .map_err(domain_error)
}

fn into_plain(result: ShortestPathResult<OrderedFloat<f64>>) -> ShortestPathResult<f64> {
    ShortestPathResult {
        distances: result.distances.into_iter().map(|d| d.into_inner()).collect(),
        parents: result.parents,
        source: result.source,
    }
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

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn unknown_algorithm(name: &str) -> ApiError {
    api_error(
        StatusCode::BAD_REQUEST,
        "invalid_algorithm",
        format!("Unknown algorithm: {}", name),
    )
}

/// Maps a library error to a `422` response with a stable error code
fn domain_error(err: Error) -> ApiError {
    let code = match &err {
        Error::Shape { .. } => "shape_error",
        Error::InvalidSource { .. } => "invalid_source",
        Error::InvalidVertex(_) => "invalid_vertex",
        Error::CycleDetected { .. } => "cycle_detected",
        Error::AsymmetricMatrix { .. } => "asymmetric_matrix",
        Error::NegativeWeight { .. } => "negative_weight",
        Error::BrokenParentChain(_) => "broken_parent_chain",
        Error::CostVectorLength { .. } => "cost_vector_length",
        Error::InvalidVertexCost { .. } => "invalid_vertex_cost",
    };
    api_error(StatusCode::UNPROCESSABLE_ENTITY, code, err.to_string())
}
