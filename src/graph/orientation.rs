//! Conversion of an undirected weight matrix into a [`DirectedGraph`].
//!
//! Output vertices are labelled `1..=n`, row/column `i` of the matrix
//! becoming vertex `i + 1`. Zero entries and the diagonal are absent edges.
//! Only symmetric matrices describe an undirected graph, so an asymmetric
//! input is rejected with [`Error::AsymmetricMatrix`], a negative entry with
//! [`Error::NegativeWeight`].
//!
//! Vertex costs are folded after orientation with [`fold_vertex_costs`].
//! Folding them into the matrix first would charge `i -> j` and `j -> i`
//! different amounts, leaving a matrix that no longer orients.

use crate::graph::matrix::check_vertex_costs;
use crate::graph::{DirectedGraph, Graph, WeightMatrix};
use crate::{Error, Result};
use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// An undirected edge between two 0-based matrix indices, `low < high`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndirectedEdge<W> {
    pub low: usize,
    pub high: usize,
    pub weight: W,
}

/// Collects every undirected edge of a symmetric matrix exactly once
pub fn undirected_edges<W>(matrix: &WeightMatrix<W>) -> Result<Vec<UndirectedEdge<W>>>
where
    W: Float + Zero + Debug + Copy,
{
    if let Some((row, col)) = matrix.first_asymmetry() {
        return Err(Error::AsymmetricMatrix { row, col });
    }
    matrix.check_non_negative()?;

    let n = matrix.n();
    let mut edges = Vec::new();
    for low in 0..n {
        for high in (low + 1)..n {
            let weight = matrix.weight(low, high);
            if weight != W::zero() {
                edges.push(UndirectedEdge { low, high, weight });
            }
        }
    }
    Ok(edges)
}

/// Orients every undirected edge both ways
///
/// Each edge `{i, j}` of weight `w` yields `i+1 -> j+1` and `j+1 -> i+1`,
/// both of weight `w`. The result therefore contains a 2-cycle for every
/// edge, and [`LongestPath`](crate::LongestPath) reports it as such.
pub fn orient<W>(matrix: &WeightMatrix<W>) -> Result<DirectedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let edges = undirected_edges(matrix)?;
    let mut graph = DirectedGraph::with_vertices(1..=matrix.n());

    for edge in &edges {
        graph.add_edge(edge.low + 1, edge.high + 1, edge.weight);
        graph.add_edge(edge.high + 1, edge.low + 1, edge.weight);
    }

    debug!(
        "oriented {} undirected edges into {} directed edges over {} vertices",
        edges.len(),
        edges.len() * 2,
        matrix.n()
    );
    Ok(graph)
}

/// Orients every undirected edge from its lower to its higher label
///
/// Labels strictly increase along every edge, so the result is acyclic.
pub fn orient_ascending<W>(matrix: &WeightMatrix<W>) -> Result<DirectedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let edges = undirected_edges(matrix)?;
    let mut graph = DirectedGraph::with_vertices(1..=matrix.n());

    for edge in &edges {
        graph.add_edge(edge.low + 1, edge.high + 1, edge.weight);
    }

    debug!(
        "oriented {} undirected edges in ascending order over {} vertices",
        edges.len(),
        matrix.n()
    );
    Ok(graph)
}

/// Adds the cost of each edge's destination to its weight
///
/// `costs[i]` belongs to vertex label `i + 1`, matching the labelling of
/// [`orient`] and [`orient_ascending`]. Orientation is unchanged, so an
/// ascending graph stays acyclic.
pub fn fold_vertex_costs<W>(graph: &DirectedGraph<W>, costs: &[W]) -> Result<DirectedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
{
    check_vertex_costs(graph.vertex_count(), costs)?;

    let mut folded = DirectedGraph::with_vertices(graph.vertices());
    for (from, to, weight) in graph.edges() {
        let cost = to
            .checked_sub(1)
            .and_then(|index| costs.get(index))
            .ok_or(Error::InvalidVertex(to))?;
        folded.add_edge(from, to, weight + *cost);
    }
    Ok(folded)
}
