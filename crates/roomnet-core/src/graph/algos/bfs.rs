use crate::graph::algos::path::reconstruct_path;
use crate::graph::Adjacency;
use std::collections::VecDeque;

/// Lazy breadth-first traversal over vertex indices.
///
/// Neighbours are queued in increasing index order, so vertices at the same
/// distance come out lowest index first. An invalid start yields nothing.
pub struct Bfs<'a, A: Adjacency + ?Sized> {
    adjacency: &'a A,
    queue: VecDeque<usize>,
    visited: Vec<bool>,
}

impl<'a, A: Adjacency + ?Sized> Bfs<'a, A> {
    pub fn new(adjacency: &'a A, start: Option<usize>) -> Self {
        let mut visited = vec![false; adjacency.order()];
        let mut queue = VecDeque::new();
        if let Some(start) = start.filter(|&s| adjacency.is_valid_index(s)) {
            visited[start] = true;
            queue.push_back(start);
        }
        Self {
            adjacency,
            queue,
            visited,
        }
    }
}

impl<A: Adjacency + ?Sized> Iterator for Bfs<'_, A> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.queue.pop_front()?;
        for (neighbor, _) in self.adjacency.neighbors(current) {
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.queue.push_back(neighbor);
            }
        }
        Some(current)
    }
}

/// Fewest-hops path from `start` to `target`, both ends included.
///
/// `start == target` yields the single-vertex path. Unreachable or invalid
/// endpoints yield an empty path.
pub fn hop_path<A: Adjacency + ?Sized>(adjacency: &A, start: usize, target: usize) -> Vec<usize> {
    if !adjacency.is_valid_index(start) || !adjacency.is_valid_index(target) {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let order = adjacency.order();
    let mut visited = vec![false; order];
    let mut predecessors: Vec<Option<usize>> = vec![None; order];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (neighbor, _) in adjacency.neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            predecessors[neighbor] = Some(current);
            if neighbor == target {
                return reconstruct_path(&predecessors, start, target);
            }
            queue.push_back(neighbor);
        }
    }

    Vec::new()
}

/// True iff a traversal from index 0 reaches every vertex.
/// An empty graph is not connected.
pub fn is_connected<A: Adjacency + ?Sized>(adjacency: &A) -> bool {
    let order = adjacency.order();
    order > 0 && Bfs::new(adjacency, Some(0)).count() == order
}
