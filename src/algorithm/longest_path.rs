//! Longest paths over acyclic directed graphs.
//!
//! The longest simple path problem is only tractable when the graph has no
//! cycles, so the engine orders vertices topologically first (Kahn's
//! algorithm) and fails with [`Error::CycleDetected`] when some vertices can
//! never be ordered. A dynamic program over that order then keeps, for every
//! vertex, the heaviest path ending there.

use std::collections::HashMap;
use std::fmt::Debug;
use log::{debug, info};
use num_traits::{Float, Zero};

use crate::algorithm::Path;
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Topological order of `graph`, ready vertices taken smallest label first
pub fn topological_order<W, G>(graph: &G) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut in_degree: HashMap<usize, usize> = graph
        .vertices()
        .map(|v| (v, graph.incoming_edges(v).count()))
        .collect();

    // Keyed by label so the smallest ready vertex comes out first
    let mut ready: MinQueue<usize, ()> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&vertex, _)| (vertex, ()))
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());
    while let Some((u, ())) = ready.pop_min() {
        order.push(u);
        for (v, _) in graph.outgoing_edges(u) {
            if let Some(degree) = in_degree.get_mut(&v) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(v, ());
                }
            }
        }
    }

    if order.len() < in_degree.len() {
        let unresolved = in_degree.len() - order.len();
        debug!("{} of {} vertices sit on or behind a cycle", unresolved, in_degree.len());
        return Err(Error::CycleDetected { unresolved });
    }

    Ok(order)
}

/// Longest path engine for directed acyclic graphs
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestPath;

impl LongestPath {
    pub const NAME: &'static str = "longest-path";

    pub fn new() -> Self {
        LongestPath
    }

    /// Heaviest path in `graph` and its total weight
    ///
    /// Every vertex may start a path with weight zero. Ties keep the first
    /// candidate in topological order, so the result is deterministic. An
    /// empty graph gives an empty path, a graph without edges gives its
    /// smallest vertex alone.
    pub fn compute<W, G>(&self, graph: &G) -> Result<Path<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let order = topological_order(graph)?;

        let mut best: HashMap<usize, W> = order.iter().map(|&v| (v, W::zero())).collect();
        let mut predecessors: HashMap<usize, usize> = HashMap::new();

        for &u in &order {
            let base = best.get(&u).copied().unwrap_or_else(W::zero);
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = base + weight;
                if let Some(current) = best.get_mut(&v) {
                    if candidate > *current {
                        *current = candidate;
                        predecessors.insert(v, u);
                    }
                }
            }
        }

        let mut end: Option<(usize, W)> = None;
        for &v in &order {
            let weight = best.get(&v).copied().unwrap_or_else(W::zero);
            if end.map_or(true, |(_, top)| weight > top) {
                end = Some((v, weight));
            }
        }

        let Some((end, weight)) = end else {
            return Ok(Path {
                vertices: Vec::new(),
                weight: W::zero(),
            });
        };

        // Predecessor links follow the topological order, so the walk ends
        let mut vertices = vec![end];
        let mut current = end;
        while let Some(&previous) = predecessors.get(&current) {
            vertices.push(previous);
            current = previous;
        }
        vertices.reverse();

        info!(
            "longest path spans {} vertices with weight {:?}",
            vertices.len(),
            weight
        );
        Ok(Path { vertices, weight })
    }
}
