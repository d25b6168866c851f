use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result};

/// Parent of the source vertex, and of every vertex that was never reached
pub const NO_PARENT: Option<usize> = None;

/// Result of a shortest path algorithm execution
///
/// Unreachable vertices keep an infinite distance and [`NO_PARENT`]; check
/// [`is_reachable`](ShortestPathResult::is_reachable) before trusting a
/// reconstructed path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, `W::infinity()` when unreachable
    pub distances: Vec<W>,

    /// Parent vertices in the shortest path tree
    pub parents: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Finite distance to `vertex`, or `None` when it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Ordered vertices from the source to `target`, `None` when unreachable
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        reconstruct_path(target, &self.parents).ok()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Walks parent links from `target` back to the vertex without a parent and
/// returns the vertices in source-to-target order
///
/// The walk is iterative and bounded by `parents.len()` steps, so a parent
/// vector containing a cycle fails with [`Error::BrokenParentChain`] instead
/// of looping. A target without a parent yields `[target]`.
pub fn reconstruct_path(target: usize, parents: &[Option<usize>]) -> Result<Vec<usize>> {
    if target >= parents.len() {
        return Err(Error::InvalidVertex(target));
    }

    let mut path = vec![target];
    let mut current = target;

    while let Some(parent) = parents[current] {
        if parent >= parents.len() {
            return Err(Error::InvalidVertex(parent));
        }
        if path.len() >= parents.len() {
            return Err(Error::BrokenParentChain(target));
        }
        path.push(parent);
        current = parent;
    }

    path.reverse();
    Ok(path)
}

/// Trait for shortest path algorithms
///
/// Implementations expect vertex identifiers `0..vertex_count()` and
/// non-negative weights. Negative weights are not checked and give
/// meaningless results.
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}

/// A path with its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    /// Vertices in traversal order
    pub vertices: Vec<usize>,

    /// Sum of the traversed edge weights
    pub weight: W,
}

impl<W> Path<W> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive `(from, to)` pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.edges().any(|edge| edge == (from, to))
    }
}
