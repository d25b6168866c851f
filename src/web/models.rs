use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a vertex in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph for web visualization
/// Path vertices and edges carry `is_path = true` so a renderer can highlight them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// A weight matrix to store as a new session
#[derive(Debug, Deserialize)]
pub struct MatrixRequest {
    pub matrix: Vec<Vec<f64>>,
    /// Per-vertex costs, charged on every edge entering the vertex
    #[serde(default)]
    pub vertex_costs: Option<Vec<f64>>,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_algorithm() -> String {
    "dijkstra".to_string()
}

/// Parameters for a shortest path run
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub source: usize,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

/// Distance and route to one target, both absent when unreachable
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub target: usize,
    pub distance: Option<f64>,
    pub path: Option<Vec<usize>>,
}

/// Response containing shortest path results
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub execution_time_ms: f64,
    pub distances: Vec<Option<f64>>,
    pub parents: Vec<Option<usize>>,
    pub routes: Vec<RouteEntry>,
}

/// How undirected edges become directed ones before the longest path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Both directions per edge; any edge forms a cycle
    #[default]
    Bidirectional,
    /// Lower label to higher label; always acyclic
    Ascending,
}

/// Parameters for a longest path run
#[derive(Debug, Default, Deserialize)]
pub struct LongestPathRequest {
    #[serde(default)]
    pub orientation: Orientation,
}

/// Response containing the longest path and the highlighted graph
#[derive(Debug, Clone, Serialize)]
pub struct LongestPathResponse {
    pub execution_id: Uuid,
    pub orientation: Orientation,
    pub execution_time_ms: f64,
    pub path: Vec<usize>,
    pub weight: f64,
    pub graph: WebGraph,
}

/// Parameters for running one engine from every source
#[derive(Debug, Deserialize)]
pub struct AllSourcesRequest {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

/// Distances from every source, `None` when unreachable
#[derive(Debug, Clone, Serialize)]
pub struct AllSourcesResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub execution_time_ms: f64,
    pub distances: Vec<Vec<Option<f64>>>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a validated matrix and its last shortest path run
///
/// `matrix` is stored as submitted; `vertex_costs` are folded in per run.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub label: Option<String>,
    pub matrix: Vec<Vec<f64>>,
    pub vertex_costs: Option<Vec<f64>>,
    pub last_result: Option<ShortestPathResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(matrix: Vec<Vec<f64>>, vertex_costs: Option<Vec<f64>>, label: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            matrix,
            vertex_costs,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
