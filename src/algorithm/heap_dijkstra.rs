use std::fmt::Debug;
use log::trace;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, NO_PARENT};
use crate::data_structures::MinQueue;
use crate::{Error, Result};

/// Dijkstra's algorithm driven by a binary heap
///
/// Heap entries are ordered by `(distance, vertex)`, so vertices are settled
/// in the same order as [`Dijkstra`](crate::Dijkstra) and both produce the
/// same distances and parents. Requires totally ordered weights such as
/// `OrderedFloat<f64>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    pub const NAME: &'static str = "heap-dijkstra";

    /// Creates a new heap-based Dijkstra instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for HeapDijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if source >= n || !graph.has_vertex(source) {
            return Err(Error::InvalidSource {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances = vec![W::infinity(); n];
        let mut parents = vec![NO_PARENT; n];
        let mut settled = vec![false; n];

        distances[source] = W::zero();

        let mut queue = MinQueue::new();
        queue.push(W::zero(), source);

        while let Some((dist_u, u)) = queue.pop_min() {
            // Stale entry: u was settled or improved after this push
            if settled[u] || dist_u > distances[u] {
                continue;
            }
            settled[u] = true;
            trace!("settled vertex {} at distance {:?}", u, dist_u);

            for (v, weight) in graph.outgoing_edges(u) {
                if v >= n {
                    return Err(Error::InvalidVertex(v));
                }
                if weight <= W::zero() {
                    continue;
                }

                let new_dist = dist_u + weight;
                if new_dist < distances[v] {
                    distances[v] = new_dist;
                    parents[v] = Some(u);
                    queue.push(new_dist, v);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            parents,
            source,
        })
    }
}
