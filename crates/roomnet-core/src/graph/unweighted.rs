use crate::bail_not_found;
use crate::config::NetworkConfig;
use crate::error::{GraphError, Result};
use crate::graph::algos::{hop_path, is_connected, Bfs, Dfs};
use crate::graph::matrix::Matrix;
use crate::graph::Adjacency;
use std::fmt;

/// Undirected, unweighted graph over an adjacency matrix.
///
/// Vertices are identified by value and by their current index. Removing a
/// vertex shifts every later index down by one, so indices must not be
/// cached across removals. Duplicate values are accepted; lookups by value
/// resolve to the first match.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    adjacency: Matrix<bool>,
    capacity: usize,
    config: NetworkConfig,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    /// Create an empty graph with the default capacity
    pub fn new() -> Self {
        Self::from_valid_config(NetworkConfig::default())
    }

    /// Create an empty graph from a storage configuration
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: NetworkConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            vertices: Vec::with_capacity(capacity),
            adjacency: Matrix::new(capacity, false),
            capacity,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertex slots before the next growth
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Vertices in index order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub(crate) fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    pub(crate) fn next_capacity(&self) -> usize {
        self.config.next_capacity(self.capacity)
    }

    fn grow(&mut self) {
        let new_capacity = self.next_capacity();
        tracing::debug!(
            from = self.capacity,
            to = new_capacity,
            "growing graph capacity"
        );
        self.vertices
            .reserve_exact(new_capacity - self.vertices.len());
        self.adjacency.grow(new_capacity);
        self.capacity = new_capacity;
    }

    /// Append a vertex and return its index
    pub(crate) fn push_vertex(&mut self, vertex: V) -> usize {
        if self.is_full() {
            self.grow();
        }
        let index = self.vertices.len();
        self.vertices.push(vertex);
        self.adjacency.clear_line(index);
        index
    }

    pub(crate) fn remove_vertex_at(&mut self, index: usize) -> Option<V> {
        if !self.is_valid_index(index) {
            return None;
        }
        self.adjacency.remove_line(index, self.vertices.len());
        Some(self.vertices.remove(index))
    }

    /// Set both matrix cells for `(a, b)`. Self-loops and invalid indices
    /// are rejected.
    pub(crate) fn connect(&mut self, a: usize, b: usize) -> bool {
        if a == b || !self.is_valid_index(a) || !self.is_valid_index(b) {
            return false;
        }
        self.adjacency.set_symmetric(a, b, true);
        true
    }

    /// Clear both matrix cells for `(a, b)`; returns whether an edge existed
    pub(crate) fn disconnect(&mut self, a: usize, b: usize) -> bool {
        if !Adjacency::has_edge(self, a, b) {
            return false;
        }
        self.adjacency.set_symmetric(a, b, false);
        true
    }

    /// Map a sequence of indices back to vertex references
    pub(crate) fn resolve<I>(&self, indices: I) -> Vec<&V>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .filter_map(|index| self.vertices.get(index))
            .collect()
    }

    /// Append a vertex, growing storage if needed, and return its index
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.push_vertex(vertex)
    }

    /// True iff every vertex is reachable from the first one.
    /// An empty graph is not connected.
    pub fn is_connected(&self) -> bool {
        is_connected(self)
    }
}

impl<V: PartialEq> Graph<V> {
    /// Index of the first vertex equal to `vertex`
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Connect two vertices. Absent vertices and self-loops leave the
    /// graph untouched; returns whether an edge was written.
    pub fn add_edge(&mut self, a: &V, b: &V) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.connect(i, j),
            _ => {
                tracing::trace!("add_edge skipped: vertex not in graph");
                false
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

    /// Vertices directly connected to `vertex`, by increasing index.
    /// Empty if `vertex` is absent.
    pub fn neighbours(&self, vertex: &V) -> Vec<&V> {
        match self.index_of(vertex) {
            Some(index) => self.resolve(self.neighbors(index).map(|(n, _)| n)),
            None => Vec::new(),
        }
    }

    /// Breadth-first order from `start`; empty if `start` is absent
    pub fn iter_bfs<'a>(&'a self, start: &V) -> impl Iterator<Item = &'a V> + 'a {
        Bfs::new(self, self.index_of(start)).map(move |index| &self.vertices[index])
    }

    /// Depth-first order from `start`; empty if `start` is absent
    pub fn iter_dfs<'a>(&'a self, start: &V) -> impl Iterator<Item = &'a V> + 'a {
        Dfs::new(self, self.index_of(start)).map(move |index| &self.vertices[index])
    }

    /// Fewest-hops path from `start` to `target`, both included.
    ///
    /// `start == target` gives the single-vertex path; absent or
    /// unreachable endpoints give an empty path.
    #[tracing::instrument(skip_all, fields(order = self.len()))]
    pub fn shortest_path(&self, start: &V, target: &V) -> Vec<&V> {
        match (self.index_of(start), self.index_of(target)) {
            (Some(s), Some(t)) => self.resolve(hop_path(self, s, t)),
            _ => Vec::new(),
        }
    }
}

impl<V: PartialEq + fmt::Debug> Graph<V> {
    /// Remove the first vertex equal to `vertex` along with its edges.
    /// Later vertices move down one index.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<V> {
        if self.is_empty() {
            return Err(GraphError::empty_collection("graph"));
        }
        let Some(index) = self.index_of(vertex) else {
            bail_not_found!("vertex", format!("{:?}", vertex));
        };
        tracing::debug!(index, vertex = ?vertex, "removing vertex");
        self.remove_vertex_at(index)
            .ok_or_else(|| GraphError::not_found("vertex", format!("{:?}", vertex)))
    }
}

impl<V> Adjacency for Graph<V> {
    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        if self.is_valid_index(from) && self.is_valid_index(to) && self.adjacency.get(from, to) {
            Some(1.0)
        } else {
            None
        }
    }
}
