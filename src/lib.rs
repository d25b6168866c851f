//! Matrix Paths - shortest and longest paths over dense weight matrices
//!
//! Graphs are supplied as square adjacency matrices where a zero entry means
//! "no edge" and a positive entry is an edge weight. Weights are expected to
//! already include the destination vertex's own cost; see
//! [`WeightMatrix::with_vertex_costs`] for a helper that folds vertex costs in.
//!
//! The crate provides:
//! - single-source shortest paths with Dijkstra's algorithm (a linear-scan and
//!   a binary-heap variant with identical, deterministic tie-breaking),
//! - path reconstruction from the resulting parent tree,
//! - orientation of an undirected matrix into a 1-based directed graph,
//! - longest paths over acyclic directed graphs with cycle detection.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, heap_dijkstra::HeapDijkstra, longest_path, longest_path::LongestPath,
    reconstruct_path, shortest_paths, Path, ShortestPathAlgorithm, ShortestPathResult, NO_PARENT,
};
/// Re-export main types for convenient use
pub use graph::{orient, orient_ascending, DirectedGraph, WeightMatrix};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Matrix is not square: row {row} has {len} entries, expected {expected}")]
    Shape {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Invalid source vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidSource { vertex: usize, vertex_count: usize },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Cycle detected: {unresolved} vertices could not be ordered topologically")]
    CycleDetected { unresolved: usize },

    #[error("Matrix is not symmetric at ({row}, {col})")]
    AsymmetricMatrix { row: usize, col: usize },

    #[error("Negative edge weight at ({row}, {col})")]
    NegativeWeight { row: usize, col: usize },

    #[error("Parent chain starting at vertex {0} does not terminate")]
    BrokenParentChain(usize),

    #[error("Vertex cost vector has {len} entries, expected {expected}")]
    CostVectorLength { expected: usize, len: usize },

    #[error("Cost of vertex {vertex} must be finite and non-negative")]
    InvalidVertexCost { vertex: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
