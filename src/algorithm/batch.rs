use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::Result;

/// Runs `algorithm` once per source vertex in parallel
///
/// Every run owns its working state and the graph is only read, so the
/// results are identical to sequential runs. They are returned ordered by
/// source vertex; the first failing source aborts the batch.
pub fn shortest_paths_from_all<W, G, A>(algorithm: &A, graph: &G) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    let n = graph.vertex_count();
    debug!("running {} from {} sources", algorithm.name(), n);

    (0..n)
        .into_par_iter()
        .map(|source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// Distance matrix built from [`shortest_paths_from_all`]
/// Row `s` holds the distances from source `s`, infinite when unreachable.
pub fn distance_matrix<W, G, A>(algorithm: &A, graph: &G) -> Result<Vec<Vec<W>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    Ok(shortest_paths_from_all(algorithm, graph)?
        .into_iter()
        .map(|result| result.distances)
        .collect())
}
