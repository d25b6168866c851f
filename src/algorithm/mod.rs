pub mod traits;
pub mod dijkstra;
pub mod heap_dijkstra;
pub mod longest_path;
pub mod batch;

pub use traits::{reconstruct_path, Path, ShortestPathAlgorithm, ShortestPathResult, NO_PARENT};

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{DirectedGraph, WeightMatrix};
use crate::Result;

/// Shortest distances and parent tree from `source` using the linear-scan
/// [`Dijkstra`](dijkstra::Dijkstra)
pub fn shortest_paths<W>(matrix: &WeightMatrix<W>, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy,
{
    dijkstra::Dijkstra::new().compute_shortest_paths(matrix, source)
}

/// Heaviest path of an acyclic directed graph, see [`longest_path::LongestPath`]
pub fn longest_path<W>(graph: &DirectedGraph<W>) -> Result<Path<W>>
where
    W: Float + Zero + Debug + Copy,
{
    longest_path::LongestPath::new().compute(graph)
}
