use crate::{bail_invalid, bail_not_found};
use crate::config::NetworkConfig;
use crate::error::{GraphError, Result};
use crate::graph::algos::{
    hop_path, is_connected, minimum_spanning_edges, path_weight, weighted_path, Bfs, Dfs,
};
use crate::graph::matrix::Matrix;
use crate::graph::{Adjacency, Graph};
use std::fmt;

/// Undirected network with non-negative edge weights.
///
/// Wraps a [`Graph`] for vertex storage and boolean adjacency, and keeps a
/// parallel weight matrix in lock-step with it (`+∞` means no edge). There
/// is no unweighted `add_edge`: every connection carries a
/// weight. Traversals test the weight matrix.
#[derive(Debug, Clone)]
pub struct Network<V> {
    graph: Graph<V>,
    weights: Matrix<f64>,
}

impl<V> Default for Network<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Network<V> {
    /// Create an empty network with the default capacity
    pub fn new() -> Self {
        Self::from_valid_config(NetworkConfig::default())
    }

    /// Create an empty network from a storage configuration
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: NetworkConfig) -> Self {
        let weights = Matrix::new(config.initial_capacity, f64::INFINITY);
        Self {
            graph: Graph::from_valid_config(config),
            weights,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.graph.capacity()
    }

    pub fn config(&self) -> &NetworkConfig {
        self.graph.config()
    }

    /// Vertices in index order
    pub fn vertices(&self) -> &[V] {
        self.graph.vertices()
    }

    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.graph.vertex(index)
    }

    /// Append a vertex, returning its index. Weight defaults are in place
    /// before the adjacency row is written.
    fn push_vertex(&mut self, vertex: V) -> usize {
        if self.graph.is_full() {
            self.weights.grow(self.graph.next_capacity());
        }
        self.weights.clear_line(self.graph.len());
        self.graph.push_vertex(vertex)
    }

    fn remove_vertex_at(&mut self, index: usize) -> Option<V> {
        if !self.is_valid_index(index) {
            return None;
        }
        self.weights.remove_line(index, self.graph.len());
        self.graph.remove_vertex_at(index)
    }

    /// Write a weighted edge between two indices into both matrices
    fn connect(&mut self, a: usize, b: usize, weight: f64) -> bool {
        if !self.graph.connect(a, b) {
            return false;
        }
        self.weights.set_symmetric(a, b, weight);
        true
    }

    fn disconnect(&mut self, a: usize, b: usize) -> bool {
        if !Adjacency::has_edge(self, a, b) {
            return false;
        }
        self.weights.set_symmetric(a, b, f64::INFINITY);
        self.graph.disconnect(a, b);
        true
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Every edge once, as `(i, j, weight)` with `i < j`
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        let order = self.len();
        (0..order)
            .flat_map(move |i| {
                self.neighbors(i)
                    .filter(move |&(j, _)| j > i)
                    .map(move |(j, w)| (i, j, w))
            })
            .collect()
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|&(_, _, w)| w).sum()
    }

    /// Append a vertex, growing storage if needed, and return its index
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.push_vertex(vertex)
    }

    /// True iff every vertex is reachable from the first one.
    /// An empty network is not connected.
    pub fn is_connected(&self) -> bool {
        is_connected(self)
    }
}

impl<V: PartialEq> Network<V> {
    /// Index of the first vertex equal to `vertex`
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.graph.index_of(vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.graph.contains(vertex)
    }

    /// Connect two vertices with a weighted edge, replacing any existing
    /// weight.
    ///
    /// The weight must be finite and non-negative. Absent vertices and
    /// self-loops leave the network untouched and return `Ok(false)`.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: f64) -> Result<bool> {
        if !weight.is_finite() || weight < 0.0 {
            bail_invalid!("edge weight", weight);
        }
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => Ok(self.connect(i, j, weight)),
            _ => {
                tracing::trace!("add_edge skipped: vertex not in network");
                Ok(false)
            }
        }
    }

    /// Disconnect two vertices; returns whether an edge was removed
    pub fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.disconnect(i, j),
            _ => false,
        }
    }

    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => Adjacency::has_edge(self, i, j),
            _ => false,
        }
    }

    /// Weight of the edge between two vertices, `+∞` if there is none
    pub fn weight(&self, a: &V, b: &V) -> f64 {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.edge_weight(i, j).unwrap_or(f64::INFINITY),
            _ => f64::INFINITY,
        }
    }

    /// Vertices directly connected to `vertex`, by increasing index.
    /// Empty if `vertex` is absent.
    pub fn neighbours(&self, vertex: &V) -> Vec<&V> {
        match self.index_of(vertex) {
            Some(index) => self.graph.resolve(self.neighbors(index).map(|(n, _)| n)),
            None => Vec::new(),
        }
    }

    /// Breadth-first order from `start`; empty if `start` is absent
    pub fn iter_bfs<'a>(&'a self, start: &V) -> impl Iterator<Item = &'a V> + 'a {
        let vertices = self.vertices();
        Bfs::new(self, self.index_of(start)).map(move |index| &vertices[index])
    }

    /// Depth-first order from `start`; empty if `start` is absent
    pub fn iter_dfs<'a>(&'a self, start: &V) -> impl Iterator<Item = &'a V> + 'a {
        let vertices = self.vertices();
        Dfs::new(self, self.index_of(start)).map(move |index| &vertices[index])
    }

    /// Fewest-hops path ignoring weights, both ends included.
    ///
    /// Unlike [`Network::shortest_path`], `start == target` gives the
    /// single-vertex path.
    pub fn hop_path(&self, start: &V, target: &V) -> Vec<&V> {
        match (self.index_of(start), self.index_of(target)) {
            (Some(s), Some(t)) => self.graph.resolve(hop_path(self, s, t)),
            _ => Vec::new(),
        }
    }

    /// Minimum-weight path from `start` to `target`, both ends included.
    ///
    /// Identical endpoints count as "no path" and give an empty result, as
    /// do absent or unreachable endpoints.
    #[tracing::instrument(skip_all, fields(order = self.len()))]
    pub fn shortest_path(&self, start: &V, target: &V) -> Vec<&V> {
        match (self.index_of(start), self.index_of(target)) {
            (Some(s), Some(t)) => self.graph.resolve(weighted_path(self, s, t)),
            _ => Vec::new(),
        }
    }

    /// Total weight of the path [`Network::shortest_path`] returns, `+∞`
    /// when it is empty
    #[tracing::instrument(skip_all, fields(order = self.len()))]
    pub fn shortest_path_weight(&self, start: &V, target: &V) -> f64 {
        match (self.index_of(start), self.index_of(target)) {
            (Some(s), Some(t)) => path_weight(self, &weighted_path(self, s, t)),
            _ => f64::INFINITY,
        }
    }
}

impl<V: PartialEq + fmt::Debug> Network<V> {
    /// Remove the first vertex equal to `vertex` along with its edges.
    /// Later vertices move down one index.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<V> {
        if self.is_empty() {
            return Err(GraphError::empty_collection("network"));
        }
        let Some(index) = self.index_of(vertex) else {
            bail_not_found!("vertex", format!("{:?}", vertex));
        };
        tracing::debug!(index, vertex = ?vertex, "removing vertex");
        self.remove_vertex_at(index)
            .ok_or_else(|| GraphError::not_found("vertex", format!("{:?}", vertex)))
    }
}

impl<V: Clone> Network<V> {
    /// Minimum spanning tree as a new network, grown from the first vertex.
    ///
    /// Vertices appear in the order the tree reached them. Empty or
    /// disconnected networks give an empty result; `self` is left untouched.
    #[tracing::instrument(skip_all, fields(order = self.len()))]
    pub fn mst_network(&self) -> Network<V> {
        let mut tree = Network::from_valid_config(self.config().clone());
        if !self.is_connected() {
            return tree;
        }

        // source index -> index in the tree
        let mut placed: Vec<Option<usize>> = vec![None; self.len()];
        placed[0] = Some(tree.push_vertex(self.graph.vertices()[0].clone()));

        for edge in minimum_spanning_edges(self) {
            let (Some(from), None) = (placed[edge.from], placed[edge.to]) else {
                tracing::warn!(from = edge.from, to = edge.to, "spanning edge out of order");
                return Network::from_valid_config(self.config().clone());
            };
            let to = tree.push_vertex(self.graph.vertices()[edge.to].clone());
            placed[edge.to] = Some(to);
            tree.connect(from, to, edge.weight);
        }

        tracing::debug!(
            vertices = tree.len(),
            total_weight = tree.total_weight(),
            "built spanning tree"
        );
        tree
    }
}

impl<V> Adjacency for Network<V> {
    fn order(&self) -> usize {
        self.graph.len()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        if !self.is_valid_index(from) || !self.is_valid_index(to) {
            return None;
        }
        let weight = self.weights.get(from, to);
        (weight < f64::INFINITY).then_some(weight)
    }
}
