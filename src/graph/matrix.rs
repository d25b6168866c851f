use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A dense square weight matrix
///
/// `weight(i, j) == 0` means there is no edge from `i` to `j`; any positive
/// value is the weight of that edge. The matrix performs no vertex-cost
/// accounting of its own: callers that model a cost per vertex must fold it
/// into the incoming edge weights before running an engine, for instance with
/// [`WeightMatrix::with_vertex_costs`].
///
/// Symmetry is not enforced. Shortest-path engines treat an asymmetric matrix
/// as a directed graph, orientation rejects it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices (rows and columns)
    n: usize,

    /// Row-major weights, `n * n` entries
    weights: Vec<W>,
}

impl<W> WeightMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a matrix from its rows, failing with [`Error::Shape`] unless
    /// every row has exactly as many entries as there are rows
    pub fn new(rows: Vec<Vec<W>>) -> Result<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(Error::Shape {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            weights.extend(entries);
        }

        Ok(WeightMatrix { n, weights })
    }

    /// Creates an `n x n` matrix with no edges
    pub fn empty(n: usize) -> Self {
        WeightMatrix {
            n,
            weights: vec![W::zero(); n * n],
        }
    }

    /// Number of vertices
    pub fn n(&self) -> usize {
        self.n
    }

    /// Raw entry at `(i, j)`. Panics when either index is out of range.
    pub fn weight(&self, i: usize, j: usize) -> W {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range for {}x{} matrix", i, j, self.n, self.n);
        self.weights[i * self.n + j]
    }

    /// Sets the raw entry at `(i, j)`. Panics when either index is out of range.
    pub fn set_weight(&mut self, i: usize, j: usize, weight: W) {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range for {}x{} matrix", i, j, self.n, self.n);
        self.weights[i * self.n + j] = weight;
    }

    /// Borrows row `i`
    pub fn row(&self, i: usize) -> &[W] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Copies the matrix back into nested rows
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.weights.chunks(self.n.max(1)).take(self.n).map(|r| r.to_vec()).collect()
    }

    /// Converts every entry with `f`, keeping the shape
    pub fn map_weights<U, F>(&self, f: F) -> WeightMatrix<U>
    where
        U: Float + Zero + Debug + Copy,
        F: Fn(W) -> U,
    {
        WeightMatrix {
            n: self.n,
            weights: self.weights.iter().map(|&w| f(w)).collect(),
        }
    }

    /// Validate that the matrix doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.check_non_negative().is_ok()
    }

    /// Like [`validate_non_negative`](Self::validate_non_negative) but reports
    /// the first negative entry in row-major order
    pub fn check_non_negative(&self) -> Result<()> {
        match self.weights.iter().position(|w| *w < W::zero()) {
            Some(idx) => Err(Error::NegativeWeight {
                row: idx / self.n,
                col: idx % self.n,
            }),
            None => Ok(()),
        }
    }

    /// First off-diagonal pair `(i, j)` with `i < j` whose mirrored entries differ
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.weight(i, j) != self.weight(j, i) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// Returns a copy where each existing edge `(i, j)` also carries the cost
    /// of its destination vertex `j`
    ///
    /// Absent edges stay absent and the diagonal is cleared, since a vertex
    /// cost only applies when the vertex is entered.
    ///
    /// Fails with [`Error::CostVectorLength`] unless there is one cost per
    /// vertex, and with [`Error::InvalidVertexCost`] for a negative or
    /// non-finite cost, which would otherwise erase or invert an edge.
    pub fn with_vertex_costs(&self, costs: &[W]) -> Result<Self> {
        check_vertex_costs(self.n, costs)?;

        let mut folded = self.clone();
        for i in 0..self.n {
            for j in 0..self.n {
                let w = self.weight(i, j);
                let value = if i == j || w <= W::zero() { W::zero() } else { w + costs[j] };
                folded.set_weight(i, j, value);
            }
        }

        Ok(folded)
    }
}

/// Checks that `costs` holds one finite, non-negative cost per vertex
pub(crate) fn check_vertex_costs<W>(vertex_count: usize, costs: &[W]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    if costs.len() != vertex_count {
        return Err(Error::CostVectorLength {
            expected: vertex_count,
            len: costs.len(),
        });
    }
    match costs.iter().position(|c| !c.is_finite() || *c < W::zero()) {
        Some(vertex) => Err(Error::InvalidVertexCost { vertex }),
        None => Ok(()),
    }
}

impl<W> Graph<W> for WeightMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| **w > W::zero()).count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.n)
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.n {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter(|(_, w)| **w > W::zero())
                .map(|(v, w)| (v, *w)),
        )
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.n {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (0..self.n)
                .map(move |u| (u, self.weight(u, vertex)))
                .filter(|(_, w)| *w > W::zero()),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.n
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.n || to >= self.n {
            return None;
        }
        let w = self.weight(from, to);
        if w > W::zero() {
            Some(w)
        } else {
            None
        }
    }
}
