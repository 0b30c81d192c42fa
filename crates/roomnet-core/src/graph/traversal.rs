/// Trait for providing index-level adjacency to the graph algorithms.
///
/// Vertices are addressed by dense indices `0..order()`. Implementors only
/// need to answer "is there an edge between `from` and `to`, and what does it
/// weigh"; neighbour enumeration is derived from that in increasing index
/// order, which is what makes every traversal deterministic.
pub trait Adjacency {
    /// Number of vertices currently addressable
    fn order(&self) -> usize;

    /// Weight of the edge between two indices, `None` if there is no edge
    /// or either index is out of range
    fn edge_weight(&self, from: usize, to: usize) -> Option<f64>;

    fn is_valid_index(&self, index: usize) -> bool {
        index < self.order()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Neighbours of `index` as `(neighbour, weight)` pairs
    fn neighbors(&self, index: usize) -> Neighbors<'_, Self> {
        Neighbors {
            adjacency: self,
            from: index,
            next: 0,
        }
    }
}

/// Iterator over the neighbours of one vertex, by increasing index
pub struct Neighbors<'a, A: Adjacency + ?Sized> {
    adjacency: &'a A,
    from: usize,
    next: usize,
}

impl<A: Adjacency + ?Sized> Iterator for Neighbors<'_, A> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.adjacency.is_valid_index(self.from) {
            return None;
        }
        while self.next < self.adjacency.order() {
            let candidate = self.next;
            self.next += 1;
            if let Some(weight) = self.adjacency.edge_weight(self.from, candidate) {
                return Some((candidate, weight));
            }
        }
        None
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Adjacency;

    /// Plain edge list for exercising algorithms without a full graph
    pub struct EdgeList {
        pub order: usize,
        pub edges: Vec<(usize, usize, f64)>,
    }

    impl EdgeList {
        pub fn new(order: usize, edges: &[(usize, usize, f64)]) -> Self {
            Self {
                order,
                edges: edges.to_vec(),
            }
        }
    }

    impl Adjacency for EdgeList {
        fn order(&self) -> usize {
            self.order
        }

        fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
            if from >= self.order || to >= self.order {
                return None;
            }
            self.edges
                .iter()
                .find(|(a, b, _)| (*a == from && *b == to) || (*a == to && *b == from))
                .map(|(_, _, w)| *w)
        }
    }
}
