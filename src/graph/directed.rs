use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Vertices carry arbitrary labels (orientation produces `1..=n`), and
/// self-loops are refused by [`add_edge`](DirectedGraph::add_edge).
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertex labels, kept sorted for deterministic traversal
    vertices: BTreeSet<usize>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<usize, Vec<(usize, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    incoming_edges: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: BTreeSet::new(),
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
        }
    }

    /// Creates a graph holding the given vertex labels and no edges
    pub fn with_vertices<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut graph = DirectedGraph::new();
        for label in labels {
            graph.add_vertex(label);
        }
        graph
    }

    /// Adds a vertex with the given label. Returns false if it already exists.
    pub fn add_vertex(&mut self, label: usize) -> bool {
        if !self.vertices.insert(label) {
            return false;
        }
        self.outgoing_edges.insert(label, Vec::new());
        self.incoming_edges.insert(label, Vec::new());
        true
    }

    /// Adds a directed edge, or updates its weight if it already exists
    ///
    /// Returns false without touching the graph when either endpoint is
    /// unknown, when `from == to`, or when the weight is negative.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if from == to || !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }

        let outgoing = self.outgoing_edges.entry(from).or_default();
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
            if let Some(incoming) = self.incoming_edges.get_mut(&to) {
                if let Some(edge) = incoming.iter_mut().find(|(source, _)| *source == from) {
                    edge.1 = weight;
                }
            }
            return true;
        }
        outgoing.push((to, weight));

        self.incoming_edges.entry(to).or_default().push((from, weight));
        true
    }

    /// All edges as `(from, to, weight)`, grouped by source vertex in
    /// ascending label order and then in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.vertices.iter().flat_map(move |&u| {
            self.outgoing_edges
                .get(&u)
                .into_iter()
                .flatten()
                .map(move |&(v, w)| (u, v, w))
        })
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|(_, _, w)| w >= W::zero())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.incoming_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if let Some(edges) = self.outgoing_edges.get(&from) {
            edges.iter().find(|(target, _)| *target == to).map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}
