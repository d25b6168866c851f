use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, NO_PARENT};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a linear scan for the nearest vertex
///
/// Each of the `n - 1` rounds settles the unsettled vertex with the smallest
/// finite distance, the smallest index winning ties, and relaxes its positive
/// outgoing edges. Runs in `O(n^2)` over a dense matrix and works with any
/// float weight, ordered or not.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    pub const NAME: &'static str = "dijkstra";

    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
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

        for round in 1..n {
            // Pick the unsettled vertex with the smallest finite distance
            let mut nearest = None;
            let mut shortest = W::infinity();
            for vertex in 0..n {
                if !settled[vertex] && distances[vertex] < shortest {
                    nearest = Some(vertex);
                    shortest = distances[vertex];
                }
            }

            let Some(u) = nearest else {
                debug!("round {}: remaining vertices are unreachable from {}", round, source);
                break;
            };
            settled[u] = true;

            for (v, weight) in graph.outgoing_edges(u) {
                if v >= n {
                    return Err(Error::InvalidVertex(v));
                }
                if weight > W::zero() && shortest + weight < distances[v] {
                    distances[v] = shortest + weight;
                    parents[v] = Some(u);
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
